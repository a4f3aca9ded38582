//! Action types for state transitions.

use tasklist_lib::task::TaskId;

use crate::{config::Config, ui::colors::Theme};

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdatePendingText(String),
    /// Saves whatever is in the input field.
    SubmitPendingText,
    /// Adds or renames a task from text handed in directly rather than
    /// typed into the input field. Entry point for callers other than the
    /// keyboard.
    SubmitText(String),
    BeginEditing(TaskId),
    CancelEditing,
    DeleteTask(TaskId),
    SetError(Option<String>),
    UpdateMessage(Option<String>),
    PreviewTheme(Theme),
    UpdateConfig(Config),
}
