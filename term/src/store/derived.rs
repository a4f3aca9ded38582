//! Derived state selectors for computed values.

use super::state::State;

/// Symbol shown next to the input while adding a task.
pub const ADD_INDICATOR: &str = "+";
/// Symbol shown next to the input while confirming an edit.
pub const CONFIRM_INDICATOR: &str = "✓";

/// Returns the table rows for the task list: position and name, with the task
/// being edited marked.
pub fn task_rows(state: &State) -> Vec<Vec<String>> {
    let editing = state.tasks.editing_id();

    state
        .tasks
        .items()
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let name = if Some(task.id) == editing {
                format!("{} (editing)", task.name)
            } else {
                task.name.clone()
            };
            vec![(i + 1).to_string(), name]
        })
        .collect()
}

/// Returns the symbol reflecting whether submitting will add or confirm.
pub fn input_indicator(state: &State) -> &'static str {
    if state.tasks.is_editing() {
        CONFIRM_INDICATOR
    } else {
        ADD_INDICATOR
    }
}

/// Returns the label shown in front of the input field.
pub fn input_label(state: &State) -> String {
    match state.tasks.editing_task() {
        Some(task) => format!("Edit {}", task.id),
        None => "New task".to_string(),
    }
}

/// Returns a short summary of how many tasks there are.
pub fn task_count_summary(state: &State) -> String {
    match state.tasks.len() {
        0 => "No tasks yet".to_string(),
        1 => "1 task".to_string(),
        n => format!("{n} tasks"),
    }
}

#[cfg(test)]
#[path = "./derived_tests.rs"]
mod tests;
