//! Library package implementing the state machine behind a single-screen
//! to-do list
//!
//! Tasks live in memory only. A [`store::TaskListStore`] owns the ordered
//! list of tasks together with the text staged in the input field and the
//! id of the task being edited, if any. Every operation is synchronous and
//! invalid input (blank text, unknown ids) is absorbed without error.
//!
//! # Examples
//!
//! ```
//! use tasklist_lib::store::TaskListStore;
//!
//! let mut store = TaskListStore::new();
//!
//! store.submit_text("Buy milk");
//! store.submit_text("Walk dog");
//!
//! let id = store.items()[0].id;
//! store.begin_editing(id);
//! assert_eq!(store.pending_text(), "Buy milk");
//!
//! store.submit_text("Buy oat milk");
//! assert_eq!(store.items()[0].name, "Buy oat milk");
//! assert!(!store.is_editing());
//!
//! let id = store.items()[1].id;
//! store.delete_task(id);
//! assert_eq!(store.len(), 1);
//! ```

#![deny(missing_docs)]
pub mod error;
pub mod store;
pub mod task;

#[cfg(test)]
#[path = "./scenario_tests.rs"]
mod tests;
