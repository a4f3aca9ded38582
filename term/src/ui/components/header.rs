//! Title bar component: list title plus a one line status underneath.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Bold list title with an optional dimmed status line below it.
pub struct Header {
    title: String,
    status: Option<String>,
}

impl Header {
    /// Creates a new header with the given title.
    pub fn new(title: String) -> Self {
        Self {
            title,
            status: None,
        }
    }

    /// Sets the line shown under the title, e.g. the task count.
    pub fn status(mut self, status: String) -> Self {
        self.status = Some(status);
        self
    }
}

impl CustomWidget for Header {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let [title_area, status_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
                .areas(area);

        Paragraph::new(Line::from(self.title))
            .style(
                Style::default()
                    .fg(ctx.state.colors.header_text)
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_area, buf);

        if let Some(status) = self.status {
            Paragraph::new(Line::from(status))
                .style(Style::new().fg(ctx.state.colors.placeholder))
                .render(status_area, buf);
        }
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
