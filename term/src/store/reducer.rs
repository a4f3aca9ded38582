//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, effect::Effect, state::State};

mod reducers;

/// Applies actions to state, producing new state and optional side effects.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }

    fn verify_tasks(&self, state: &State) {
        if let Err(err) = state.tasks.verify() {
            log::error!("task list invariant violated: {err}");
        }
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    fn reduce(&self, state: &mut State, action: Action) -> Effect {
        match action {
            // Task actions
            Action::UpdatePendingText(text) => {
                log::trace!("processing action: UpdatePendingText({text:?})");
                reducers::tasks::update_pending_text(state, text);
                Effect::None
            }
            Action::SubmitPendingText => {
                self.log_action("SubmitPendingText", &state.tasks.pending_text());
                reducers::tasks::submit_pending_text(state);
                self.verify_tasks(state);
                Effect::None
            }
            Action::SubmitText(text) => {
                self.log_action("SubmitText", &text);
                reducers::tasks::submit_text(state, &text);
                self.verify_tasks(state);
                Effect::None
            }
            Action::BeginEditing(id) => {
                self.log_action("BeginEditing", &id);
                reducers::tasks::begin_editing(state, id);
                self.verify_tasks(state);
                Effect::None
            }
            Action::CancelEditing => {
                self.log_action("CancelEditing", &"");
                reducers::tasks::cancel_editing(state);
                Effect::None
            }
            Action::DeleteTask(id) => {
                self.log_action("DeleteTask", &id);
                reducers::tasks::delete_task(state, id);
                self.verify_tasks(state);
                Effect::None
            }

            // UI actions
            Action::SetError(err) => {
                self.log_action("SetError", &err);
                reducers::ui::set_error(state, err);
                Effect::None
            }
            Action::UpdateMessage(message) => {
                self.log_action("UpdateMessage", &message);
                reducers::ui::update_message(state, message);
                Effect::None
            }
            Action::PreviewTheme(theme) => {
                self.log_action("PreviewTheme", &theme);
                reducers::ui::preview_theme(state, theme);
                Effect::None
            }

            // Config actions
            Action::UpdateConfig(config) => {
                self.log_action("UpdateConfig", &config);
                reducers::config::update_config(state, config.clone());
                Effect::SaveConfig(config)
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
