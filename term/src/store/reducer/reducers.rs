//! Reducers grouped by the slice of state they update.

pub mod config;
pub mod tasks;
pub mod ui;
