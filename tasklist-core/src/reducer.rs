//! The pure state transition function.

use crate::action::Action;
use crate::state::{AppState, renumber};
use crate::task::{Task, validate_title};

/// Applies `action` to `state` and returns the next state.
///
/// Unknown task ids and out-of-range indices leave the state unchanged.
/// After every action, ids are unique and `order` matches list position.
#[must_use]
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::AddTask {
            id,
            title,
            created_at,
        } => match validate_title(title) {
            Ok(title) => {
                if state.position(id).is_some() {
                    return state;
                }
                state
                    .tasks
                    .insert(0, Task::new(id.clone(), title, *created_at));
                renumber(&mut state.tasks);
                state.error.clear();
            }
            Err(e) => state.error = e.to_string(),
        },
        Action::ToggleTask { id } => {
            if let Some(task) = state.tasks.iter_mut().find(|t| &t.id == id) {
                task.is_completed = !task.is_completed;
            }
        }
        Action::DeleteTask { id } => {
            if let Some(index) = state.position(id) {
                state.tasks.remove(index);
                renumber(&mut state.tasks);
            }
        }
        Action::ReorderTasks { from, to } => {
            let len = state.tasks.len();
            if *from >= len {
                return state;
            }
            let to = (*to).min(len - 1);
            if *from == to {
                return state;
            }
            let task = state.tasks.remove(*from);
            state.tasks.insert(to, task);
            renumber(&mut state.tasks);
        }
        Action::SetFilter(filter) => state.filter = *filter,
        Action::SetTheme(theme) => state.theme = *theme,
        Action::SetError(message) => state.error.clone_from(message),
        Action::ClearError => state.error.clear(),
    }
    state
}
