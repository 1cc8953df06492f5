//! User and task data structures.
//!
//! This module defines the `User` struct, a roster member owning an ordered
//! list of to-do items, and the `Task` struct for a single item with its
//! completion state.

/// A roster member with an ordered to-do list.
///
/// Users are created by the add-user operation and are never renamed or
/// removed. The task list order is insertion order and is meaningful: it is
/// the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub tasks: Vec<Task>,
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl User {
    /// Create a user with the given name and no tasks.
    pub fn new(name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}

impl Task {
    /// Create a pending task with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
        }
    }
}
