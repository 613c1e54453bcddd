//! Task record and title validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum allowed task title length in characters.
pub const MAX_TASK_TITLE_LENGTH: usize = 255;

/// Errors produced when validating user input for a task.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task title is empty or whitespace only.
    #[error("Task title cannot be empty")]
    TitleEmpty,
    /// Task title exceeds [`MAX_TASK_TITLE_LENGTH`].
    #[error("Task title is too long")]
    TitleTooLong,
}

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier assigned at creation.
    pub id: TaskId,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Whether the task has been completed.
    pub is_completed: bool,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Dense zero-based rank among all tasks.
    pub order: usize,
}

impl Task {
    /// Creates a pending task at rank 0.
    #[must_use]
    pub const fn new(id: TaskId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            is_completed: false,
            created_at,
            order: 0,
        }
    }
}

/// Trims `raw` and checks it against the title rules.
///
/// # Errors
///
/// Returns [`TaskError::TitleEmpty`] if nothing is left after trimming, or
/// [`TaskError::TitleTooLong`] if the trimmed title exceeds
/// [`MAX_TASK_TITLE_LENGTH`] characters.
pub fn validate_title(raw: &str) -> Result<String, TaskError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskError::TitleEmpty);
    }
    if title.chars().count() > MAX_TASK_TITLE_LENGTH {
        return Err(TaskError::TitleTooLong);
    }
    Ok(title.to_string())
}
