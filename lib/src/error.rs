//! Custom Error and Result types for this library

use thiserror::Error;

use crate::task::TaskId;

/// Custom Error type for this library
///
/// None of the store operations return errors. These variants are only
/// produced when explicitly verifying the store's invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// The same id was found on more than one task
    #[error("duplicate task id: {_0}")]
    DuplicateId(TaskId),

    /// The store is editing a task that is no longer in the list
    #[error("edit target does not exist: {_0}")]
    DanglingEditTarget(TaskId),
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`TaskListError`]
pub type Result<T> = std::result::Result<T, TaskListError>;
