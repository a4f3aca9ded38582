//! Task list reducers delegating to the core task store.

use tasklist_lib::task::TaskId;

use crate::store::state::State;

use super::ui::update_message;

/// Mirrors the text typed into the input field.
pub fn update_pending_text(state: &mut State, text: String) {
    state.tasks.set_pending_text(text);
}

/// Adds or renames a task using the text typed into the input field.
pub fn submit_pending_text(state: &mut State) {
    clear_message(state);
    state.tasks.submit_pending();
}

/// Adds or renames a task using the provided text.
pub fn submit_text(state: &mut State, text: &str) {
    clear_message(state);
    state.tasks.submit_text(text);
}

/// Starts editing a task, staging its name in the input field.
pub fn begin_editing(state: &mut State, id: TaskId) {
    clear_message(state);
    state.tasks.begin_editing(id);
}

/// Abandons the current edit session.
pub fn cancel_editing(state: &mut State) {
    clear_message(state);
    state.tasks.cancel_editing();
}

/// Removes a task, cancelling its edit session if it was being edited.
pub fn delete_task(state: &mut State, id: TaskId) {
    clear_message(state);
    state.tasks.delete_task(id);
}

// status messages only last until the user acts on the list again
fn clear_message(state: &mut State) {
    update_message(state, None);
}
