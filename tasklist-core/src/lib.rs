//! Domain core for `Tasklist`: the task model, the pure state reducer and the
//! persisted snapshot format.

pub mod action;
pub mod filter;
pub mod reducer;
pub mod snapshot;
pub mod state;
pub mod task;
pub mod theme;

pub use action::Action;
pub use filter::{Filter, TaskCounts};
pub use reducer::reduce;
pub use state::AppState;
pub use task::{MAX_TASK_TITLE_LENGTH, Task, TaskError, TaskId};
pub use theme::Theme;
