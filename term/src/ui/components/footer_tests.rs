use ratatui::{Terminal, backend::TestBackend};

use crate::{store::state::State, ui::test_utils::buffer_lines};

use super::*;

#[test]
fn renders_footer_component() {
    let footer = InfoFooter::new("(q) quit".to_string());
    let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
    let state = State::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            footer.render(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    let lines = buffer_lines(terminal.backend());
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('╔'));
    assert!(lines[1].contains("(q) quit"));
    assert!(lines[2].starts_with('╚'));
}
