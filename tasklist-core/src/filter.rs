//! Completion-status filter for the derived task view.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which subset of tasks the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
}

impl Filter {
    /// All filters in tab order.
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    /// Returns `true` if `task` belongs in this view.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.is_completed,
            Self::Completed => task.is_completed,
        }
    }

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Text shown when the view is empty.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No tasks yet. Add one above!",
            Self::Pending => "No pending tasks.",
            Self::Completed => "No completed tasks yet.",
        }
    }

    /// Next tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Previous tab, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Pending => Self::All,
            Self::Completed => Self::Pending,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// Per-filter task totals, always computed from the full list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Number of tasks.
    pub all: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskCounts {
    /// Tallies `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.is_completed).count();
        Self {
            all: tasks.len(),
            pending: tasks.len() - completed,
            completed,
        }
    }

    /// Count for a given filter tab.
    #[must_use]
    pub const fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Pending => self.pending,
            Filter::Completed => self.completed,
        }
    }
}
