//! Editable text input component.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

const CURSOR: &str = "█";

/// State for an input field (focus and current value).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

/// Labeled text input with a mode indicator that highlights when focused.
pub struct Input {
    label: String,
    indicator: Option<String>,
    placeholder: Option<String>,
}

impl Input {
    /// Creates a new input with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
            indicator: None,
            placeholder: None,
        }
    }

    /// Sets the symbol rendered in front of the label.
    pub fn indicator(mut self, indicator: &str) -> Self {
        self.indicator = Some(String::from(indicator));
        self
    }

    /// Sets the text shown while the value is empty.
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(String::from(placeholder));
        self
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;
        let mut spans = Vec::new();

        if let Some(indicator) = self.indicator {
            spans.push(Span::styled(
                format!("[{indicator}] "),
                Style::default()
                    .fg(colors.border_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::styled(
            format!("{0}: ", self.label),
            Style::default().fg(colors.text),
        ));

        if state.value.is_empty() && !state.editing {
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(
                    placeholder,
                    Style::default().fg(colors.placeholder),
                ));
            }
        } else {
            let mut style = Style::default().fg(colors.text);
            if state.editing {
                style = style.fg(colors.input_editing);
            }
            spans.push(Span::styled(state.value.as_str(), style));
        }

        if state.editing {
            spans.push(Span::styled(
                CURSOR,
                Style::default().fg(colors.input_editing),
            ));
        }

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
#[path = "./input_tests.rs"]
mod tests;
