//! State transitions understood by the reducer.

use chrono::{DateTime, Utc};

use crate::filter::Filter;
use crate::task::TaskId;
use crate::theme::Theme;

/// A request to change [`AppState`](crate::state::AppState).
///
/// Everything impure (fresh ids, wall-clock time) is carried in the action so
/// that [`reduce`](crate::reducer::reduce) stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Prepend a new task; the title is validated by the reducer.
    AddTask {
        /// Identifier for the new task.
        id: TaskId,
        /// Raw title as typed.
        title: String,
        /// Creation time.
        created_at: DateTime<Utc>,
    },
    /// Flip the completion flag of a task.
    ToggleTask {
        /// Task to toggle.
        id: TaskId,
    },
    /// Remove a task.
    DeleteTask {
        /// Task to delete.
        id: TaskId,
    },
    /// Move the task at `from` to `to`; both are full-list indices.
    ReorderTasks {
        /// Current index.
        from: usize,
        /// Target index.
        to: usize,
    },
    /// Change the view filter.
    SetFilter(Filter),
    /// Change the colour scheme.
    SetTheme(Theme),
    /// Show a validation message.
    SetError(String),
    /// Dismiss the validation message.
    ClearError,
}

impl Action {
    /// Builds an [`Action::AddTask`] stamped with a new id and the current time.
    #[must_use]
    pub fn add_task(title: impl Into<String>) -> Self {
        Self::AddTask {
            id: TaskId::new(),
            title: title.into(),
            created_at: Utc::now(),
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::ToggleTask { .. } => "toggle_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::ReorderTasks { .. } => "reorder_tasks",
            Self::SetFilter(_) => "set_filter",
            Self::SetTheme(_) => "set_theme",
            Self::SetError(_) => "set_error",
            Self::ClearError => "clear_error",
        }
    }
}
