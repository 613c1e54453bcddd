//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::Palette;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;

/// Key hints for the focused panel.
#[must_use]
pub const fn help_text(focus: PanelFocus) -> &'static str {
    match focus {
        PanelFocus::Input => "Enter: add | Tab: switch panel | Ctrl+T: theme | Esc: quit",
        PanelFocus::Filters => "\u{2190}\u{2192}/1-3: filter | Tab: switch panel | Esc: quit",
        PanelFocus::List => {
            "Space: toggle | d: delete | J/K: move | \u{2190}\u{2192}: filter | Esc: quit"
        }
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let counts = app.state().counts();

    let status_line = Line::from(vec![
        Span::styled(
            concat!(" Tasklist v", env!("CARGO_PKG_VERSION")),
            palette.bold(),
        ),
        Span::raw(" | "),
        Span::raw(format!("{} left, {} done", counts.pending, counts.completed)),
        Span::raw(" | "),
        Span::styled(help_text(app.focus), palette.dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(palette.status_bar());
    frame.render_widget(paragraph, area);
}
