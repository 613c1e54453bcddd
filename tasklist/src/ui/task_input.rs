//! Task input box and its validation message.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tasklist_core::MAX_TASK_TITLE_LENGTH;

use super::theme::Palette;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;

/// Placeholder shown in an empty, unfocused input.
pub const PLACEHOLDER: &str = "What needs to be done?";

/// Render the input box.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let is_focused = app.focus == PanelFocus::Input;

    // Build the input text with cursor
    let mut display_text = app.input.clone();
    if is_focused {
        let at = display_text
            .char_indices()
            .nth(app.cursor_position)
            .map_or(display_text.len(), |(i, _)| i);
        display_text.insert(at, '\u{2588}');
    }

    let input_line = if app.input.is_empty() && !is_focused {
        Line::from(Span::styled(PLACEHOLDER, palette.dimmed()))
    } else {
        Line::from(Span::styled(display_text, palette.normal()))
    };

    let border = if app.state().has_error() {
        palette.error()
    } else {
        palette.border(is_focused)
    };

    let counter = Line::from(Span::styled(
        format!(" {}/{MAX_TASK_TITLE_LENGTH} ", app.input.chars().count()),
        palette.dimmed(),
    ))
    .right_aligned();

    let block = Block::default()
        .title(" New task ")
        .title_bottom(counter)
        .borders(Borders::ALL)
        .border_style(border);

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the validation message line (blank when there is none).
pub fn render_error<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    palette: &Palette,
) {
    if !app.state().has_error() {
        return;
    }
    let line = Line::from(vec![
        Span::styled(format!(" \u{2717} {}", app.state().error), palette.error()),
        Span::styled("  (Esc to dismiss)", palette.dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
