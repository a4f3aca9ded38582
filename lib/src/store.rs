//! Provides the in-memory task list and its add / edit / delete state machine
//!
//! The store has two modes:
//!
//! - **Idle**: submitting text appends a new task
//! - **Editing**: submitting text renames the task being edited in place and
//!   returns the store to Idle
//!
//! The task being edited is tracked by id only and resolved by lookup, so
//! deleting it can never leave a dangling reference behind.

use log::*;
use std::collections::HashSet;

use crate::{
    error::{Result, TaskListError},
    task::{IdGenerator, SequentialIdGenerator, Task, TaskId},
};

/// Number of times the id generator is asked for a fresh id before the store
/// falls back to its own counter
const MAX_ID_ATTEMPTS: usize = 8;

/// The current mode of a [`TaskListStore`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Submitting text appends a new task
    Idle,
    /// Submitting text renames the task with this id
    Editing(TaskId),
}

/// Ordered, in-memory collection of tasks plus the state of the input field
///
/// Tasks keep their insertion order. Editing a task changes its name in place
/// and never moves it.
#[derive(Debug, Clone)]
pub struct TaskListStore<G: IdGenerator = SequentialIdGenerator> {
    items: Vec<Task>,
    editing_id: Option<TaskId>,
    pending_text: String,
    id_generator: G,
    // every id handed out so far, including ids of deleted tasks
    issued: HashSet<TaskId>,
}

impl TaskListStore {
    /// Returns a new empty store using a [`SequentialIdGenerator`]
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIdGenerator::new())
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TaskListStore<G> {
    /// Returns a new empty store drawing task ids from the provided generator
    pub fn with_id_generator(id_generator: G) -> Self {
        Self {
            items: Vec::new(),
            editing_id: None,
            pending_text: String::new(),
            id_generator,
            issued: HashSet::new(),
        }
    }

    /// Returns all tasks in insertion order
    pub fn items(&self) -> &[Task] {
        &self.items
    }

    /// Returns the number of tasks
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no tasks
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the task with the given id if present
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Returns the index of the task with the given id if present
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }

    /// Returns true if a task with the given id is present
    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the id of the task currently being edited
    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing_id
    }

    /// Returns the task currently being edited
    pub fn editing_task(&self) -> Option<&Task> {
        self.editing_id.and_then(|id| self.get(id))
    }

    /// Returns true while an edit session is active
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Returns the current mode of the store
    pub fn mode(&self) -> Mode {
        match self.editing_id {
            Some(id) => Mode::Editing(id),
            None => Mode::Idle,
        }
    }

    /// Returns the text currently staged for submission
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Replaces the staged text, mirroring what the user has typed
    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    /// Submits the staged text. Equivalent to calling
    /// [`TaskListStore::submit_text`] with [`TaskListStore::pending_text`].
    pub fn submit_pending(&mut self) {
        let text = self.pending_text.clone();
        self.submit_text(&text);
    }

    /// Adds a new task, or renames the task being edited
    ///
    /// Text is trimmed first. Blank text is ignored and leaves the store
    /// untouched, including the staged text. Otherwise the staged text is
    /// cleared and the store returns to [`Mode::Idle`].
    pub fn submit_text(&mut self, text: &str) {
        let name = text.trim();

        if name.is_empty() {
            trace!("ignoring blank submission");
            return;
        }

        match self.editing_id.take() {
            Some(id) => match self.items.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    debug!("renaming task {id}: {} -> {name}", task.name);
                    task.name = name.to_string();
                }
                None => {
                    warn!("edit target {id} not found, adding as new task");
                    self.append(name);
                }
            },
            None => self.append(name),
        }

        self.pending_text.clear();
    }

    /// Starts editing the task with the given id and stages its current name
    ///
    /// Switching directly from one edit target to another discards any
    /// unsaved staged text. Unknown ids are ignored.
    pub fn begin_editing(&mut self, id: TaskId) {
        let Some(task) = self.get(id) else {
            trace!("ignoring edit request for unknown task {id}");
            return;
        };

        debug!("editing task {id}");
        self.pending_text = task.name.clone();
        self.editing_id = Some(id);
    }

    /// Abandons the current edit session and clears the staged text
    ///
    /// Does nothing while idle.
    pub fn cancel_editing(&mut self) {
        if let Some(id) = self.editing_id.take() {
            debug!("cancelled editing task {id}");
            self.pending_text.clear();
        }
    }

    /// Removes the task with the given id. Unknown ids are ignored.
    ///
    /// Deleting the task being edited also cancels the edit session.
    pub fn delete_task(&mut self, id: TaskId) {
        let Some(idx) = self.position(id) else {
            trace!("ignoring delete request for unknown task {id}");
            return;
        };

        let task = self.items.remove(idx);
        debug!("deleted task {task}");

        if self.editing_id == Some(id) {
            self.cancel_editing();
        }
    }

    /// Checks that task ids are unique and that the edit target, if any,
    /// exists
    pub fn verify(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());

        for task in self.items.iter() {
            if !seen.insert(task.id) {
                return Err(TaskListError::DuplicateId(task.id));
            }
        }

        match self.editing_id {
            Some(id) if !seen.contains(&id) => {
                Err(TaskListError::DanglingEditTarget(id))
            }
            _ => Ok(()),
        }
    }

    fn append(&mut self, name: &str) {
        let id = self.next_unused_id();
        debug!("adding task {id}: {name}");
        self.items.push(Task {
            id,
            name: name.to_string(),
        });
    }

    fn next_unused_id(&mut self) -> TaskId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();
            if self.issued.insert(id) {
                return id;
            }
            warn!("id generator returned previously issued id: {id}");
        }

        let id = self.fallback_id();
        warn!(
            "id generator failed to produce a fresh id after \
             {MAX_ID_ATTEMPTS} attempts, using {id}"
        );
        self.issued.insert(id);
        id
    }

    // first free id above the highest one issued so far
    fn fallback_id(&self) -> TaskId {
        let highest = self.issued.iter().map(TaskId::value).max().unwrap_or(0);
        let mut candidate = highest.wrapping_add(1);

        while self.issued.contains(&TaskId::new(candidate)) {
            candidate = candidate.wrapping_add(1);
        }

        TaskId::new(candidate)
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
