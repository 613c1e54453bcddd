//! Title line with the theme toggle indicator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tasklist_core::Theme;

use super::theme::Palette;
use crate::app::App;
use crate::storage::KeyValueStore;

/// Render the header.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(22)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" \u{2713} ", palette.highlighted()),
        Span::styled("Task Manager", palette.bold()),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    let (icon, label) = match app.state().theme {
        Theme::Light => ("\u{2600}", "Light"),
        Theme::Dark => ("\u{263e}", "Dark"),
    };
    let toggle = Line::from(vec![
        Span::styled(format!("{icon} {label}"), palette.highlighted()),
        Span::styled(" (Ctrl+T) ", palette.dimmed()),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(toggle), chunks[1]);
}
