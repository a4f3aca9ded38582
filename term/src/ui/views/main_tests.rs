use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
};

use crate::{
    store::{
        MockDispatcher, StateGetter, Store, reducer::StoreReducer,
        state::State,
    },
    ui::test_utils::{buffer_lines, buffer_text},
};

use super::*;

fn setup() -> (MainView, Rc<Store>) {
    let store = Rc::new(Store::new(State::default(), StoreReducer::boxed()));
    let view = MainView::new(Rc::clone(&store) as Rc<dyn Dispatcher>);
    (view, store)
}

fn render(view: &MainView, state: &State) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };
            view.render_ref(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    terminal
}

fn key(code: KeyCode) -> CrossTermEvent {
    CrossTermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_renders_title_and_summary() {
    let (view, store) = setup();

    let terminal = render(&view, &store.get_state());
    let lines = buffer_lines(terminal.backend());

    assert!(lines[0].starts_with('╔'));
    assert!(lines[1].contains("Task List"));
    assert!(lines[2].contains("No tasks yet"));
    assert!(lines[6].contains("New task:"));
    assert!(lines[22].contains("(ctrl+c) quit | (enter) save"));
}

#[test]
fn test_renders_tasks_and_count() {
    let (view, store) = setup();
    store.dispatch(Action::SubmitText("Buy milk".to_string()));
    store.dispatch(Action::SubmitText("Walk dog".to_string()));

    let terminal = render(&view, &store.get_state());
    let text = buffer_text(terminal.backend());

    assert!(text.contains("2 tasks"));
    assert!(text.contains("Buy milk"));
    assert!(text.contains("Walk dog"));
}

#[test]
fn test_message_replaces_summary() {
    let (view, store) = setup();
    store.dispatch(Action::UpdateMessage(Some("Theme: Red".to_string())));

    let terminal = render(&view, &store.get_state());
    let lines = buffer_lines(terminal.backend());

    assert!(lines[2].contains("Theme: Red"));
    assert!(!lines[2].contains("No tasks yet"));
}

#[test]
fn test_summary_returns_after_task_action() {
    let (view, store) = setup();
    store.dispatch(Action::UpdateMessage(Some("Theme: Red".to_string())));
    store.dispatch(Action::SubmitText("Buy milk".to_string()));

    let terminal = render(&view, &store.get_state());
    let lines = buffer_lines(terminal.backend());

    assert!(lines[2].contains("1 task"));
    assert!(!lines[2].contains("Theme: Red"));
}

#[test]
fn test_renders_configured_title() {
    let (view, store) = setup();
    let mut config = store.get_state().config.clone();
    config.title = "Chores".to_string();
    store.dispatch(Action::UpdateConfig(config));

    let terminal = render(&view, &store.get_state());
    let lines = buffer_lines(terminal.backend());

    assert!(lines[1].contains("Chores"));
}

#[test]
fn test_renders_error_popover() {
    let (view, store) = setup();
    store.dispatch(Action::SetError(Some("disk full".to_string())));

    let terminal = render(&view, &store.get_state());
    let text = buffer_text(terminal.backend());

    assert!(text.contains("Error: disk full"));
    assert!(text.contains("Press enter to clear error"));
}

#[test]
fn test_error_popover_consumes_events() {
    let (view, store) = setup();
    store.dispatch(Action::SetError(Some("disk full".to_string())));

    let state = store.get_state();
    let ctx = CustomWidgetContext {
        state: &state,
        app_area: Rect::new(0, 0, 80, 24),
    };

    assert!(view.process_event(&key(KeyCode::Char('x')), &ctx));
    assert_eq!(store.get_state().tasks.pending_text(), "");
    assert!(store.get_state().error.is_some());

    assert!(view.process_event(&key(KeyCode::Enter), &ctx));
    assert!(store.get_state().error.is_none());
}

#[test]
fn test_delegates_to_tasks_view() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .withf(|action| *action == Action::UpdatePendingText("a".to_string()))
        .times(1)
        .return_const(());

    let view = MainView::new(Rc::new(dispatcher));
    let state = State::default();
    let ctx = CustomWidgetContext {
        state: &state,
        app_area: Rect::new(0, 0, 80, 24),
    };

    assert!(view.process_event(&key(KeyCode::Char('a')), &ctx));
}

#[test]
fn test_legend_comes_from_tasks_view() {
    let (view, store) = setup();

    assert_eq!(view.legend(&store.get_state()), view.tasks_view.legend(&store.get_state()));
}
