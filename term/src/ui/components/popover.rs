//! Placement of the error popover over the rest of the screen.

use ratatui::layout::{Constraint, Flex, Layout, Rect, Size};

/// Smallest popover that still fits a short error and the dismiss hint.
pub const MIN_POPOVER_SIZE: Size = Size {
    width: 34,
    height: 7,
};

/// Centers a popover covering the given percentages of the parent area.
///
/// The popover grows to at least `min` on small terminals but never past the
/// parent itself.
pub fn get_popover_area(
    area: Rect,
    percent_x: u16,
    percent_y: u16,
    min: Size,
) -> Rect {
    let width = scale(area.width, percent_x).max(min.width).min(area.width);
    let height = scale(area.height, percent_y)
        .max(min.height)
        .min(area.height);

    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn scale(value: u16, percent: u16) -> u16 {
    // never exceeds value since percent is capped at 100
    (u32::from(value) * u32::from(percent.min(100)) / 100) as u16
}

#[cfg(test)]
#[path = "./popover_tests.rs"]
mod tests;
