//! Application state and its derived views.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::filter::{Filter, TaskCounts};
use crate::task::{Task, TaskId, validate_title};
use crate::theme::Theme;

/// A broken state invariant, reported by [`AppState::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// Two tasks share an identifier.
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),
    /// A task's `order` does not match its position in the list.
    #[error("task at position {position} has order {order}")]
    OrderMismatch {
        /// Index in the list.
        position: usize,
        /// Stored rank.
        order: usize,
    },
    /// A task's title is blank, too long, or not trimmed.
    #[error("task at position {position} has an invalid title")]
    InvalidTitle {
        /// Index in the list.
        position: usize,
    },
}

/// The whole application state, persisted as one record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    /// Tasks in rank order.
    pub tasks: Vec<Task>,
    /// Active view filter.
    pub filter: Filter,
    /// Active colour scheme.
    pub theme: Theme,
    /// Current validation message; empty when there is none.
    pub error: String,
}

impl AppState {
    /// The derived view: tasks matching the active filter, in rank order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// Per-filter totals over the full list.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Index of a task in the full list.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Whether a validation message is showing.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Verifies unique ids, valid titles and a dense zero-based order matching
    /// list position.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for (position, task) in self.tasks.iter().enumerate() {
            if !seen.insert(&task.id) {
                return Err(InvariantViolation::DuplicateId(task.id.clone()));
            }
            if validate_title(&task.title).as_deref() != Ok(task.title.as_str()) {
                return Err(InvariantViolation::InvalidTitle { position });
            }
            if task.order != position {
                return Err(InvariantViolation::OrderMismatch {
                    position,
                    order: task.order,
                });
            }
        }
        Ok(())
    }

    /// Restores the invariants on a state read from untrusted storage.
    ///
    /// Tasks are stably sorted by stored rank. Titles are trimmed, and tasks
    /// whose title is still blank or too long are dropped, as are later
    /// duplicates of an id. Ranks are then renumbered `0..n`. Returns `true`
    /// if anything changed.
    pub fn repair(&mut self) -> bool {
        let before = self.tasks.clone();
        self.tasks.sort_by_key(|t| t.order);
        self.tasks.retain_mut(|t| match validate_title(&t.title) {
            Ok(title) => {
                t.title = title;
                true
            }
            Err(_) => false,
        });
        let mut seen = HashSet::with_capacity(self.tasks.len());
        self.tasks.retain(|t| seen.insert(t.id.clone()));
        renumber(&mut self.tasks);
        self.tasks != before
    }
}

/// Rewrites every task's `order` to its list index.
pub(crate) fn renumber(tasks: &mut [Task]) {
    for (index, task) in tasks.iter_mut().enumerate() {
        task.order = index;
    }
}
