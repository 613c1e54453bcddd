//! Terminal UI rendering.

pub mod fallback;
pub mod filter_bar;
pub mod header;
pub mod status_bar;
pub mod task_input;
pub mod task_item;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use crate::app::App;
use crate::storage::KeyValueStore;
use theme::Palette;

/// Main draw function for the entire UI.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let palette = Palette::for_theme(app.state().theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    if let Some(fallback) = app.fallback() {
        fallback::render(frame, frame.area(), fallback, &palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error line
            Constraint::Length(3), // Filters
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app, &palette);
    task_input::render(frame, chunks[1], app, &palette);
    task_input::render_error(frame, chunks[2], app, &palette);
    filter_bar::render(frame, chunks[3], app, &palette);
    task_list::render(frame, chunks[4], app, &palette);
    status_bar::render(frame, chunks[5], app, &palette);
}
