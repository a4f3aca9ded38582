//! Provides the task data structure and task id generation

#[cfg(test)]
use mockall::automock;

use std::fmt::Display;

/// Opaque identifier assigned to a task when it is created
///
/// Ids are stable for the lifetime of a task and are never reused within a
/// single [`crate::store::TaskListStore`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// Returns a new TaskId wrapping the given raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value of this id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Data structure representing a single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id of the task
    pub id: TaskId,
    /// Non-empty, trimmed label of the task
    pub name: String,
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

/// Produces ids for newly created tasks
///
/// Implementations only need to guarantee uniqueness for the lifetime of the
/// process; the values carry no temporal meaning.
#[cfg_attr(test, automock)]
pub trait IdGenerator {
    /// Returns the next id
    fn next_id(&mut self) -> TaskId;
}

/// Default [`IdGenerator`] backed by a monotonically increasing counter
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Returns a new generator whose first id is `t1`
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Returns a new generator whose first id has the given value
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        // u64 will not wrap within a process lifetime
        self.next += 1;
        id
    }
}

#[cfg(test)]
#[path = "./task_tests.rs"]
mod tests;
