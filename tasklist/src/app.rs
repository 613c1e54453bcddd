//! Application state and event handling.
//!
//! [`App`] owns the domain [`AppState`] and routes every change through the
//! reducer, then writes the result back to storage. View-only state (input
//! buffer, focus, selection) lives here and is never persisted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::{Action, AppState, Filter, MAX_TASK_TITLE_LENGTH, Task, TaskId, Theme, reduce};

use crate::persistence::{LoadOutcome, StatePersistence};
use crate::storage::KeyValueStore;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Task input box (default).
    Input,
    /// Filter tabs.
    Filters,
    /// Task list.
    List,
}

/// Direction for moving the selected task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the top of the list.
    Up,
    /// Towards the bottom of the list.
    Down,
}

/// Error screen shown after storage fails; offers a full reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Description of what went wrong.
    pub message: String,
}

/// Main application state.
pub struct App<S: KeyValueStore> {
    state: AppState,
    persistence: StatePersistence<S>,
    initial: AppState,
    fallback: Option<Fallback>,
    /// Current text input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the visible task list.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// chrono format for task creation times.
    pub timestamp_format: String,
}

impl<S: KeyValueStore> App<S> {
    /// Rehydrate from `persistence`, starting from `initial` if nothing is
    /// stored. A storage failure opens the fallback screen.
    pub fn load(persistence: StatePersistence<S>, initial: AppState) -> Self {
        let mut app = Self {
            state: initial.clone(),
            persistence,
            initial,
            fallback: None,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected: 0,
            should_quit: false,
            timestamp_format: "%b %d %H:%M".to_string(),
        };
        app.reload();
        app
    }

    /// Set the display format for task creation times.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Current domain state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &StatePersistence<S> {
        &self.persistence
    }

    /// The storage-failure screen, if showing.
    #[must_use]
    pub const fn fallback(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// Task under the selection cursor.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.state.visible_tasks().get(self.selected).copied()
    }

    // -----------------------------------------------------------------------
    // State transitions
    // -----------------------------------------------------------------------

    /// Run `action` through the reducer and persist the result.
    ///
    /// Actions that change nothing are not written. A failed write opens the
    /// fallback screen; the in-memory state keeps the change.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(self.state.clone(), &action);
        if next == self.state {
            tracing::trace!(action = action.kind(), "no state change");
            return;
        }
        self.state = next;
        self.clamp_selection();
        tracing::debug!(action = action.kind(), tasks = self.state.tasks.len(), "state updated");

        if let Err(e) = self.persistence.save(&self.state) {
            tracing::error!(action = action.kind(), error = %e, "failed to persist state");
            self.fallback = Some(Fallback {
                message: e.to_string(),
            });
        }
    }

    /// Re-read storage and reset the view, as a full page reload would.
    pub fn reload(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.focus = PanelFocus::Input;
        self.selected = 0;

        match self.persistence.load(self.initial.clone()) {
            Ok(loaded) => {
                if loaded.outcome == LoadOutcome::Corrupt {
                    tracing::warn!("discarded unreadable saved state");
                }
                self.state = loaded.state;
                self.fallback = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load state");
                self.fallback = Some(Fallback {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Add a task; invalid titles set the error message instead.
    pub fn add_task(&mut self, title: &str) {
        self.dispatch(Action::add_task(title));
    }

    /// Flip a task's completion flag.
    pub fn toggle_task(&mut self, id: &TaskId) {
        self.dispatch(Action::ToggleTask { id: id.clone() });
    }

    /// Delete a task.
    pub fn delete_task(&mut self, id: &TaskId) {
        self.dispatch(Action::DeleteTask { id: id.clone() });
    }

    /// Move the task at full-list index `from` to `to`.
    pub fn reorder_tasks(&mut self, from: usize, to: usize) {
        self.dispatch(Action::ReorderTasks { from, to });
    }

    /// Switch the view filter.
    pub fn set_filter(&mut self, filter: Filter) {
        if filter != self.state.filter {
            self.selected = 0;
            self.dispatch(Action::SetFilter(filter));
        }
    }

    /// Switch the colour scheme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.dispatch(Action::SetTheme(theme));
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.state.theme.toggled());
    }

    /// Dismiss the validation message.
    pub fn clear_error(&mut self) {
        self.dispatch(Action::ClearError);
    }

    /// Move the selected task one place within the visible list.
    ///
    /// Under a filter the neighbour may be several places away in the full
    /// list; the task lands directly beside it.
    pub fn move_selected(&mut self, direction: MoveDirection) {
        let visible: Vec<TaskId> = self
            .state
            .visible_tasks()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        let target = match direction {
            MoveDirection::Up => self.selected.checked_sub(1),
            MoveDirection::Down => Some(self.selected + 1),
        };
        let (Some(current), Some(target)) = (visible.get(self.selected), target) else {
            return;
        };
        let Some(neighbour) = visible.get(target) else {
            return;
        };
        let (Some(from), Some(to)) = (self.state.position(current), self.state.position(neighbour))
        else {
            return;
        };

        self.reorder_tasks(from, to);
        self.selected = target;
    }

    /// Submit the input buffer as a new task.
    pub fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            self.clear_error();
            return;
        }
        let title = self.input.clone();
        self.add_task(&title);
        if !self.state.has_error() {
            self.input.clear();
            self.cursor_position = 0;
            self.selected = 0;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.state.visible_tasks().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.fallback.is_some() {
            self.handle_fallback_key(key);
            return;
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                self.toggle_theme();
                return;
            }
            (KeyCode::Esc, _) => {
                if self.state.has_error() {
                    self.clear_error();
                } else {
                    self.should_quit = true;
                }
                return;
            }
            (KeyCode::BackTab, _) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Filters => self.handle_filters_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    fn handle_fallback_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r' | 'R') => self.reload(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.enter_char(c);
            }
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            KeyCode::Down => self.focus = PanelFocus::Filters,
            _ => {}
        }
    }

    /// Handle key event when the filter tabs are focused.
    fn handle_filters_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.set_filter(self.state.filter.prev()),
            KeyCode::Right | KeyCode::Char('l') => self.set_filter(self.state.filter.next()),
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Pending),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),
            KeyCode::Up => self.focus = PanelFocus::Input,
            KeyCode::Down | KeyCode::Enter => self.focus = PanelFocus::List,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Up if shift => self.move_selected(MoveDirection::Up),
            KeyCode::Down if shift => self.move_selected(MoveDirection::Down),
            KeyCode::Char('K') => self.move_selected(MoveDirection::Up),
            KeyCode::Char('J') => self.move_selected(MoveDirection::Down),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected == 0 {
                    self.focus = PanelFocus::Filters;
                } else {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.state.visible_tasks().len();
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char(' ' | 'x') | KeyCode::Enter => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.toggle_task(&id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
                    self.delete_task(&id);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.set_filter(self.state.filter.prev()),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('f') => {
                self.set_filter(self.state.filter.next());
            }
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Pending),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('a' | 'i') => self.focus = PanelFocus::Input,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Cycle focus forward: Input -> Filters -> List -> Input.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Filters,
            PanelFocus::Filters => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Cycle focus backward: Input -> List -> Filters -> Input.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Filters,
            PanelFocus::Filters => PanelFocus::Input,
        };
    }

    // -----------------------------------------------------------------------
    // Input editing
    // -----------------------------------------------------------------------

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        if self.input.chars().count() >= MAX_TASK_TITLE_LENGTH {
            return;
        }
        let at = self.byte_index(self.cursor_position);
        self.input.insert(at, c);
        self.cursor_position += 1;
        self.on_input_changed();
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let at = self.byte_index(self.cursor_position - 1);
            self.input.remove(at);
            self.cursor_position -= 1;
            self.on_input_changed();
        }
    }

    /// Delete the character under the cursor.
    fn delete_char_forward(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let at = self.byte_index(self.cursor_position);
            self.input.remove(at);
            self.on_input_changed();
        }
    }

    fn on_input_changed(&mut self) {
        if self.state.has_error() && !self.input.trim().is_empty() {
            self.clear_error();
        }
    }
}
