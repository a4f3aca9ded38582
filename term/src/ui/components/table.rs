//! Scrollable table component with selection support.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{
        Cell, HighlightSpacing, Row, ScrollbarState, StatefulWidget,
        Table as RatatuiTable, TableState,
    },
};
use std::cell::RefCell;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::views::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef,
};

use super::scrollbar::ScrollBar;

/// Used for overflow when item exceeds max width
const ELLIPSIS: &str = "…";

/// Scrollable table with optional headers, row selection, and scrollbar.
pub struct Table {
    headers: Option<Vec<String>>,
    items: Vec<Vec<String>>,
    column_sizes: Vec<u16>,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl Table {
    /// Creates a new table with the given items, optional headers, and column
    /// sizes. The last column fills the remaining width.
    pub fn new(
        items: Vec<Vec<String>>,
        headers: Option<Vec<String>>,
        column_sizes: Vec<u16>,
    ) -> Self {
        let scroll_state = ScrollbarState::new(items.len());

        Self {
            headers,
            column_sizes,
            items,
            table_state: RefCell::new(TableState::new()),
            scroll_state: RefCell::new(scroll_state),
        }
    }

    /// Updates the table items, clamping the selection to the new length.
    /// Returns the selected index after the update.
    pub fn update_items(&mut self, items: Vec<Vec<String>>) -> Option<usize> {
        self.items = items;

        {
            let mut scroll = self.scroll_state.borrow_mut();
            *scroll = scroll.content_length(self.items.len());
        }

        let selected = self.table_state.borrow().selected();

        match selected {
            Some(_) if self.items.is_empty() => self.select(None),
            Some(i) if i >= self.items.len() => {
                self.select(Some(self.items.len() - 1))
            }
            other => other,
        }
    }

    /// Returns the currently selected row index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.table_state.borrow().selected()
    }

    /// Selects the given row, or clears the selection.
    pub fn select(&self, index: Option<usize>) -> Option<usize> {
        let index = index.filter(|i| *i < self.items.len());
        self.table_state.borrow_mut().select(index);
        let mut scroll = self.scroll_state.borrow_mut();
        *scroll = scroll.position(index.unwrap_or_default());
        index
    }

    /// Moves selection to the next row without wrapping.
    pub fn next(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = match self.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };

        self.select(Some(i))
    }

    /// Moves selection to the previous row without wrapping.
    pub fn previous(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = match self.selected() {
            // prevent wrap with saturating_sub
            Some(i) => i.saturating_sub(1),
            None => 0,
        };

        self.select(Some(i))
    }
}

impl CustomWidgetRef for Table {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        // main table view + right aligned scrollbar
        let [table_area, scroll_area] = Layout::horizontal([
            Constraint::Percentage(100),
            Constraint::Length(3),
        ])
        .areas(area);

        let header = self.headers.as_ref().map(|hs| {
            let header_style = Style::default()
                .fg(ctx.state.colors.text)
                .bg(ctx.state.colors.row_header_bg)
                .add_modifier(Modifier::BOLD);

            hs.iter()
                .map(|h| Cell::from(format!(" {h}")))
                .collect::<Row>()
                .style(header_style)
                .height(1)
        });

        let selected_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(ctx.state.colors.selected_row_fg);

        // the last column consumes whatever the fixed columns leave over
        let last = self.column_sizes.len().saturating_sub(1);
        let fixed: u16 = self.column_sizes.iter().take(last).sum();
        let free_for_last_col = table_area.width.saturating_sub(fixed + 2);

        let rows = self
            .items
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, content)| {
                        let max_width = if i == last {
                            free_for_last_col
                        } else {
                            self.column_sizes.get(i).copied().unwrap_or(0)
                        };
                        Cell::from(format!(
                            " {}",
                            fit_to_width(content, max_width.saturating_sub(1))
                        ))
                    })
                    .collect::<Row>()
                    .style(
                        Style::new()
                            .fg(ctx.state.colors.text)
                            .bg(ctx.state.colors.buffer_bg),
                    )
                    .height(1)
            })
            .collect::<Vec<_>>();

        let constraints = self
            .column_sizes
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == last {
                    Constraint::Min(*w)
                } else {
                    Constraint::Length(*w)
                }
            })
            .collect::<Vec<_>>();

        let mut t = RatatuiTable::new(rows, constraints)
            .row_highlight_style(selected_style)
            .bg(ctx.state.colors.buffer_bg)
            .highlight_spacing(HighlightSpacing::Always);

        if let Some(h) = header {
            t = t.header(h);
        }

        t.render(table_area, buf, &mut self.table_state.borrow_mut());

        let scrollbar = ScrollBar::new(self.items.len());
        let mut scroll_state = self.scroll_state.borrow_mut();
        scrollbar.render(scroll_area, buf, &mut scroll_state, ctx);
    }
}

/// Truncates content to fit within max_width display columns, appending an
/// ellipsis when anything was cut.
fn fit_to_width(content: &str, max_width: u16) -> String {
    let max_width = max_width as usize;

    if content.width() <= max_width {
        return content.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut value = String::new();

    for c in content.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        value.push(c);
    }

    let mut value = value.trim_end().to_string();
    value.push_str(ELLIPSIS);
    value
}

#[cfg(test)]
#[path = "./table_tests.rs"]
mod tests;
