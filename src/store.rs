//! The in-memory store of users, tasks, and the active selection.
//!
//! This is the single source of truth for every view. Mutations build a
//! replacement user list and commit it wholesale through one commit point,
//! bumping a revision counter so dependent views can detect change without
//! diffing nested structures. Rejected inputs (empty strings, missing
//! selection, out-of-range indices) change neither state nor revision.

use log::debug;

use crate::user::{Task, User};

/// Session-scoped store of users and the current selection.
///
/// All state lives in process memory and disappears when the session ends.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    selected: Option<usize>,
    revision: u64,
}

impl Store {
    /// Create an empty store with no users and no selection.
    pub fn new() -> Self {
        Store::default()
    }

    /// All users, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Index of the currently selected user, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Monotonic counter bumped on every accepted mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Commit a replacement user list and bump the revision. Single mutation
    /// point for user data; every accepted change is a top-level swap.
    fn commit(&mut self, users: Vec<User>) {
        self.users = users;
        self.revision += 1;
    }

    /// Append a user with the trimmed name and an empty task list.
    ///
    /// Whitespace-only input is silently ignored. Selection is untouched
    /// either way. Returns whether a user was added.
    pub fn add_user(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("add_user: ignored empty name");
            return false;
        }
        let mut users = self.users.clone();
        users.push(User::new(name));
        self.commit(users);
        debug!("add_user: {:?} ({} users)", name, self.users.len());
        true
    }

    /// Point the selection at `index`.
    ///
    /// Callers only pass indices obtained from enumerating the current user
    /// list, but an out-of-range index resets the selection to none so the
    /// selection invariant holds even if a caller slips.
    pub fn select_user(&mut self, index: usize) {
        let next = if index < self.users.len() {
            Some(index)
        } else {
            debug!("select_user: index {} out of range, clearing selection", index);
            None
        };
        if self.selected != next {
            self.selected = next;
            self.revision += 1;
        }
    }

    /// Clear the selection.
    pub fn deselect_user(&mut self) {
        if self.selected.is_some() {
            self.selected = None;
            self.revision += 1;
        }
    }

    /// Append a pending task to the selected user's list.
    ///
    /// No-op without a selection or when the trimmed text is empty. Returns
    /// whether a task was added.
    pub fn add_task(&mut self, text: &str) -> bool {
        let Some(sel) = self.selected else {
            debug!("add_task: no user selected");
            return false;
        };
        let text = text.trim();
        if text.is_empty() {
            debug!("add_task: ignored empty text");
            return false;
        }
        let mut users = self.users.clone();
        users[sel].tasks.push(Task::new(text));
        self.commit(users);
        true
    }

    /// Flip the completion state of the selected user's task at `task_index`.
    ///
    /// Returns whether a task was toggled.
    pub fn toggle_task(&mut self, task_index: usize) -> bool {
        let Some(sel) = self.selected else {
            return false;
        };
        if task_index >= self.users[sel].tasks.len() {
            return false;
        }
        let mut users = self.users.clone();
        let task = &mut users[sel].tasks[task_index];
        task.completed = !task.completed;
        self.commit(users);
        true
    }

    /// Replace the text of the selected user's task at `task_index`.
    ///
    /// The edit is abandoned when the trimmed replacement is empty; the
    /// original text survives. Returns whether the edit was applied.
    pub fn edit_task(&mut self, task_index: usize, new_text: &str) -> bool {
        let Some(sel) = self.selected else {
            return false;
        };
        let new_text = new_text.trim();
        if new_text.is_empty() {
            debug!("edit_task: abandoned, empty replacement");
            return false;
        }
        if task_index >= self.users[sel].tasks.len() {
            return false;
        }
        let mut users = self.users.clone();
        users[sel].tasks[task_index].text = new_text.to_string();
        self.commit(users);
        true
    }

    /// Remove the selected user's task at `task_index`.
    ///
    /// Later tasks shift down by one position. Returns whether a task was
    /// removed.
    pub fn delete_task(&mut self, task_index: usize) -> bool {
        let Some(sel) = self.selected else {
            return false;
        };
        if task_index >= self.users[sel].tasks.len() {
            return false;
        }
        let mut users = self.users.clone();
        users[sel].tasks.remove(task_index);
        self.commit(users);
        true
    }

    /// The currently selected user, if any.
    pub fn active_user(&self) -> Option<&User> {
        self.selected.and_then(|i| self.users.get(i))
    }

    /// `(completed, total)` over the active user's tasks, recounted from
    /// scratch. `(0, 0)` when there is no selection or no tasks.
    pub fn completion_summary(&self) -> (usize, usize) {
        match self.active_user() {
            Some(user) => {
                let done = user.tasks.iter().filter(|t| t.completed).count();
                (done, user.tasks.len())
            }
            None => (0, 0),
        }
    }
}
