//! Rendering tests against ratatui's `TestBackend`.
//!
//! Draws full frames and checks that the components show what the state
//! says: tasks, counts, empty-state copy, validation errors, the fallback
//! screen and the theme palette.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tasklist::app::{App, PanelFocus};
use tasklist::persistence::StatePersistence;
use tasklist::storage::MemoryStore;
use tasklist::ui::{self, theme::Palette};
use tasklist_core::{AppState, Filter, Theme};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn make_app() -> App<MemoryStore> {
    App::load(StatePersistence::new(MemoryStore::new()), AppState::default())
}

/// Draws one frame and returns the buffer.
fn render(app: &App<MemoryStore>) -> Buffer {
    let backend = TestBackend::new(90, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Flattens the buffer into one string per row.
fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn empty_list_shows_placeholder_and_empty_state() {
    let mut app = make_app();
    app.focus = PanelFocus::List;
    let text = screen_text(&render(&app));
    assert!(text.contains("Task Manager"));
    assert!(text.contains("What needs to be done?"));
    assert!(text.contains("No tasks yet. Add one above!"));
    assert!(!text.contains("Showing"));
}

#[test]
fn tasks_and_counts_are_drawn() {
    let mut app = make_app();
    app.add_task("buy stamps");
    app.add_task("post letter");
    let id = app.state().tasks[1].id.clone();
    app.toggle_task(&id);

    let text = screen_text(&render(&app));
    assert!(text.contains("[ ] post letter"));
    assert!(text.contains("[\u{2713}] buy stamps"));
    assert!(text.contains("All 2"));
    assert!(text.contains("Pending 1"));
    assert!(text.contains("Completed 1"));
    assert!(text.contains("Showing 2 of 2 tasks"));
    assert!(text.contains("1 left, 1 done"));
}

#[test]
fn filtered_views_use_their_own_empty_copy() {
    let mut app = make_app();
    app.add_task("open item");

    app.set_filter(Filter::Completed);
    let text = screen_text(&render(&app));
    assert!(text.contains("No completed tasks yet."));
    assert!(text.contains("Showing 0 of 1 tasks"));
    assert!(!text.contains("open item"));

    let id = app.state().tasks[0].id.clone();
    app.toggle_task(&id);
    app.set_filter(Filter::Pending);
    assert!(screen_text(&render(&app)).contains("No pending tasks."));
}

#[test]
fn validation_error_is_shown() {
    let mut app = make_app();
    app.add_task("  ");
    let text = screen_text(&render(&app));
    assert!(text.contains("Task title cannot be empty"));

    app.clear_error();
    assert!(!screen_text(&render(&app)).contains("cannot be empty"));
}

#[test]
fn input_shows_typed_text_and_counter() {
    let mut app = make_app();
    app.input = "draft".to_string();
    app.cursor_position = 5;
    let text = screen_text(&render(&app));
    assert!(text.contains("draft\u{2588}"));
    assert!(text.contains("5/255"));
}

#[test]
fn fallback_replaces_main_screen() {
    let mut app = make_app();
    app.add_task("visible before failure");
    app.persistence().store().set_failing(true);
    app.add_task("triggers failure");

    let text = screen_text(&render(&app));
    assert!(text.contains("Oops! Something went wrong."));
    assert!(text.contains("reload saved tasks"));
    assert!(!text.contains("What needs to be done?"));
}

#[test]
fn theme_switch_changes_background() {
    let mut app = make_app();
    let light = render(&app);
    assert_eq!(light[(0, 23)].bg, Palette::LIGHT.status_bg);
    assert_eq!(light[(89, 12)].bg, Palette::LIGHT.bg);
    assert!(screen_text(&light).contains("Light"));

    app.set_theme(Theme::Dark);
    let dark = render(&app);
    assert_eq!(dark[(89, 12)].bg, Palette::DARK.bg);
    assert!(screen_text(&dark).contains("Dark"));
}
