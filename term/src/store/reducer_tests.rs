use tasklist_lib::task::TaskId;

use crate::{
    config::Config,
    store::{action::Action, effect::Effect, reducer::StoreReducer, state::State},
    ui::colors::{Colors, Theme},
};

use super::Reducer;

fn setup() -> (State, StoreReducer) {
    let state = State::default();
    (state, StoreReducer)
}

fn names(state: &State) -> Vec<String> {
    state.tasks.items().iter().map(|t| t.name.clone()).collect()
}

#[test]
fn test_update_pending_text() {
    let (mut state, reducer) = setup();

    let effect = reducer
        .reduce(&mut state, Action::UpdatePendingText("Buy".to_string()));

    assert_eq!(effect, Effect::None);
    assert_eq!(state.tasks.pending_text(), "Buy");
    assert!(state.tasks.is_empty());
}

#[test]
fn test_submit_pending_text() {
    let (mut state, reducer) = setup();

    reducer
        .reduce(&mut state, Action::UpdatePendingText("Buy milk".to_string()));
    reducer.reduce(&mut state, Action::SubmitPendingText);

    assert_eq!(names(&state), vec!["Buy milk"]);
    assert_eq!(state.tasks.pending_text(), "");
}

#[test]
fn test_submit_blank_pending_text_is_ignored() {
    let (mut state, reducer) = setup();

    reducer.reduce(&mut state, Action::UpdatePendingText("  ".to_string()));
    reducer.reduce(&mut state, Action::SubmitPendingText);

    assert!(state.tasks.is_empty());
    assert_eq!(state.tasks.pending_text(), "  ");
}

#[test]
fn test_submit_text() {
    let (mut state, reducer) = setup();

    reducer.reduce(&mut state, Action::SubmitText(" Walk dog ".to_string()));

    assert_eq!(names(&state), vec!["Walk dog"]);
    assert_eq!(state.tasks.items()[0].id, TaskId::new(1));
}

#[test]
fn test_begin_editing_and_submit() {
    let (mut state, reducer) = setup();
    reducer.reduce(&mut state, Action::SubmitText("Buy milk".to_string()));
    reducer.reduce(&mut state, Action::SubmitText("Walk dog".to_string()));

    reducer.reduce(&mut state, Action::BeginEditing(TaskId::new(1)));
    assert_eq!(state.tasks.editing_id(), Some(TaskId::new(1)));
    assert_eq!(state.tasks.pending_text(), "Buy milk");

    reducer.reduce(
        &mut state,
        Action::UpdatePendingText("Buy oat milk".to_string()),
    );
    reducer.reduce(&mut state, Action::SubmitPendingText);

    assert_eq!(names(&state), vec!["Buy oat milk", "Walk dog"]);
    assert!(!state.tasks.is_editing());
}

#[test]
fn test_cancel_editing() {
    let (mut state, reducer) = setup();
    reducer.reduce(&mut state, Action::SubmitText("Buy milk".to_string()));
    reducer.reduce(&mut state, Action::BeginEditing(TaskId::new(1)));

    reducer.reduce(&mut state, Action::CancelEditing);

    assert!(!state.tasks.is_editing());
    assert_eq!(state.tasks.pending_text(), "");
    assert_eq!(names(&state), vec!["Buy milk"]);
}

#[test]
fn test_delete_task() {
    let (mut state, reducer) = setup();
    reducer.reduce(&mut state, Action::SubmitText("Buy milk".to_string()));
    reducer.reduce(&mut state, Action::SubmitText("Walk dog".to_string()));

    reducer.reduce(&mut state, Action::DeleteTask(TaskId::new(2)));
    reducer.reduce(&mut state, Action::DeleteTask(TaskId::new(2)));

    assert_eq!(names(&state), vec!["Buy milk"]);
}

#[test]
fn test_delete_task_being_edited() {
    let (mut state, reducer) = setup();
    reducer.reduce(&mut state, Action::SubmitText("Buy milk".to_string()));
    reducer.reduce(&mut state, Action::BeginEditing(TaskId::new(1)));

    reducer.reduce(&mut state, Action::DeleteTask(TaskId::new(1)));

    assert!(state.tasks.is_empty());
    assert!(!state.tasks.is_editing());
    assert_eq!(state.tasks.pending_text(), "");
}

#[test]
fn test_set_error() {
    let (mut state, reducer) = setup();

    reducer.reduce(&mut state, Action::SetError(Some("error".to_string())));
    assert!(state.error.is_some());

    reducer.reduce(&mut state, Action::SetError(None));
    assert!(state.error.is_none());
}

#[test]
fn test_update_message() {
    let (mut state, reducer) = setup();
    reducer.reduce(
        &mut state,
        Action::UpdateMessage(Some("message".to_string())),
    );
    assert_eq!(state.message.unwrap(), "message".to_string());
}

#[test]
fn test_task_actions_clear_message() {
    let (mut state, reducer) = setup();
    let actions = vec![
        Action::SubmitText("Buy milk".to_string()),
        Action::BeginEditing(TaskId::new(1)),
        Action::CancelEditing,
        Action::DeleteTask(TaskId::new(1)),
    ];

    for action in actions {
        state.message = Some("Theme: Red".to_string());
        reducer.reduce(&mut state, action);
        assert!(state.message.is_none());
    }
}

#[test]
fn test_typing_keeps_message() {
    let (mut state, reducer) = setup();
    state.message = Some("Theme: Red".to_string());

    reducer.reduce(&mut state, Action::UpdatePendingText("B".to_string()));

    assert_eq!(state.message, Some("Theme: Red".to_string()));
}

#[test]
fn test_preview_theme() {
    let (mut state, reducer) = setup();
    let expected_colors = Colors::new(Theme::Emerald.to_palette(true), true);

    let effect = reducer.reduce(&mut state, Action::PreviewTheme(Theme::Emerald));

    assert_eq!(effect, Effect::None);
    assert_eq!(state.theme, Theme::Emerald);
    assert_eq!(state.colors, expected_colors);
    // previewing never touches the persisted config
    assert_eq!(state.config.theme, "Blue");
}

#[test]
fn test_update_config() {
    let (mut state, reducer) = setup();

    let expected_config = Config {
        theme: "Red".to_string(),
        title: "Chores".to_string(),
    };

    let effect = reducer
        .reduce(&mut state, Action::UpdateConfig(expected_config.clone()));

    assert_eq!(effect, Effect::SaveConfig(expected_config.clone()));
    assert_eq!(state.config, expected_config);
    assert_eq!(state.theme, Theme::Red);
    assert_eq!(state.colors, Colors::from_theme(Theme::Red, true));
}
