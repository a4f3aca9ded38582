//! Helpers for asserting on rendered terminal output.

use ratatui::backend::TestBackend;

/// Returns each row of the rendered buffer as a string.
pub fn buffer_lines(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    let area = buffer.area;

    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Returns the full rendered buffer joined by newlines.
pub fn buffer_text(backend: &TestBackend) -> String {
    buffer_lines(backend).join("\n")
}
