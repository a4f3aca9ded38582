//! Scrollbar shown beside the task table once the rows overflow.

use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    widgets::{
        Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
    },
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// Vertical scrollbar positioned on the right side. Draws nothing while
/// every row fits.
pub struct ScrollBar {
    rows: usize,
}

impl ScrollBar {
    /// Creates a scrollbar for a list with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }
}

impl CustomStatefulWidget for ScrollBar {
    type State = ScrollbarState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        // the margin lines the track up with the table body under its header
        let scroll_area = area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        if scroll_area.width < 1 || self.rows <= usize::from(scroll_area.height)
        {
            return;
        }

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::new().fg(ctx.state.colors.scroll_bar_fg));

        scrollbar.render(scroll_area, buf, state)
    }
}

#[cfg(test)]
#[path = "./scrollbar_tests.rs"]
mod tests;
