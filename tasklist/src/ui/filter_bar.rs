//! Filter tabs with per-status counts.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use tasklist_core::{Filter, TaskCounts};

use super::theme::Palette;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;

/// "Showing X of Y tasks", or `None` when there are no tasks at all.
#[must_use]
pub fn summary(counts: &TaskCounts, filter: Filter) -> Option<String> {
    (counts.all > 0).then(|| {
        format!(
            "Showing {} of {} tasks",
            counts.for_filter(filter),
            counts.all
        )
    })
}

/// Render the filter bar.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let is_focused = app.focus == PanelFocus::Filters;
    let state = app.state();
    let counts = state.counts();

    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(palette.border(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(26)])
        .split(inner);

    let titles: Vec<Line> = Filter::ALL
        .iter()
        .map(|f| {
            Line::from(vec![
                Span::raw(f.label()),
                Span::raw(" "),
                Span::styled(format!("{}", counts.for_filter(*f)), palette.dimmed()),
            ])
        })
        .collect();
    let selected = Filter::ALL
        .iter()
        .position(|f| *f == state.filter)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(palette.normal())
        .highlight_style(palette.highlighted())
        .divider(Span::styled("|", palette.dimmed()));
    frame.render_widget(tabs, chunks[0]);

    if let Some(text) = summary(&counts, state.filter) {
        let line = Line::from(Span::styled(text, palette.dimmed())).right_aligned();
        frame.render_widget(Paragraph::new(line), chunks[1]);
    }
}
