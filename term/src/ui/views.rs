//! View implementations for the task list screen.

pub mod main;
pub mod tasks;
pub mod traits;
