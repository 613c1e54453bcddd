//! Task list container.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::task_item;
use super::theme::Palette;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;

/// Render the filtered task list, or the empty-state message.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let is_focused = app.focus == PanelFocus::List;
    let state = app.state();
    let visible = state.visible_tasks();

    let block = Block::default()
        .title(" Tasks ")
        .title_bottom(
            Line::from(Span::styled(
                " Shift+\u{2191}\u{2193} or J/K to reorder ",
                palette.dimmed(),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(palette.border(is_focused));

    if visible.is_empty() {
        let text = Paragraph::new(Line::from(Span::styled(
            state.filter.empty_message(),
            palette.dimmed(),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| task_item::list_item(task, palette, &app.timestamp_format))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            palette.selected()
        } else {
            palette.selected_unfocused()
        })
        .highlight_symbol("\u{25b6} ");

    let mut list_state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
