//! Integration tests for state persistence across restarts.
//!
//! Drives `App` against a real `FileStore` in a temp directory and checks
//! that every change is written through and rehydrated on the next start.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use tasklist::app::App;
use tasklist::persistence::{LoadOutcome, StatePersistence};
use tasklist::storage::{FileStore, KeyValueStore, MemoryStore};
use tasklist_core::snapshot::{self, STATE_KEY};
use tasklist_core::{AppState, Filter, Theme};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Starts an app over `dir`, as a fresh process would.
fn start(dir: &std::path::Path) -> App<FileStore> {
    App::load(StatePersistence::new(FileStore::new(dir)), AppState::default())
}

fn titles<S: KeyValueStore>(app: &App<S>) -> Vec<String> {
    app.state().tasks.iter().map(|t| t.title.clone()).collect()
}

// ---------------------------------------------------------------------------
// Restart round trips
// ---------------------------------------------------------------------------

#[test]
fn state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = start(dir.path());
        app.add_task("water plants");
        app.add_task("pay rent");
        let id = app.state().tasks[1].id.clone();
        app.toggle_task(&id);
        app.set_filter(Filter::Completed);
        app.set_theme(Theme::Dark);
    }

    let app = start(dir.path());
    assert_eq!(titles(&app), ["pay rent", "water plants"]);
    assert!(app.state().tasks[1].is_completed);
    assert_eq!(app.state().filter, Filter::Completed);
    assert_eq!(app.state().theme, Theme::Dark);
    assert_eq!(app.state().check_invariants(), Ok(()));
}

#[test]
fn reorder_and_delete_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = start(dir.path());
        for t in ["c", "b", "a"] {
            app.add_task(t);
        }
        app.reorder_tasks(0, 2);
        let id = app.state().tasks[0].id.clone();
        app.delete_task(&id);
    }

    let app = start(dir.path());
    assert_eq!(titles(&app), ["c", "a"]);
    let orders: Vec<usize> = app.state().tasks.iter().map(|t| t.order).collect();
    assert_eq!(orders, [0, 1]);
}

#[test]
fn record_is_overwritten_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = start(dir.path());
    app.add_task("first");
    let id = app.state().tasks[0].id.clone();
    app.delete_task(&id);

    let raw = fs::read_to_string(dir.path().join(format!("{STATE_KEY}.json"))).unwrap();
    let stored = snapshot::decode(&raw).unwrap();
    assert!(stored.tasks.is_empty());
    assert!(!raw.contains("first"));
}

#[test]
fn corrupt_file_starts_fresh_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(format!("{STATE_KEY}.json")), "{\"tasks\": [").unwrap();

    let persistence = StatePersistence::new(FileStore::new(dir.path()));
    let loaded = persistence.load(AppState::default()).unwrap();
    assert_eq!(loaded.outcome, LoadOutcome::Corrupt);

    let mut app = start(dir.path());
    assert!(app.state().tasks.is_empty());
    assert!(app.fallback().is_none());
    app.add_task("fresh start");

    let reloaded = persistence.load(AppState::default()).unwrap();
    assert_eq!(reloaded.outcome, LoadOutcome::Restored);
    assert_eq!(reloaded.state.tasks[0].title, "fresh start");
}

#[test]
fn initial_state_applies_only_when_nothing_saved() {
    let dir = tempfile::tempdir().unwrap();
    let dark = AppState {
        theme: Theme::Dark,
        ..AppState::default()
    };

    let mut app = App::load(StatePersistence::new(FileStore::new(dir.path())), dark.clone());
    assert_eq!(app.state().theme, Theme::Dark);
    app.set_theme(Theme::Light);

    let app = App::load(StatePersistence::new(FileStore::new(dir.path())), dark);
    assert_eq!(app.state().theme, Theme::Light);
}

#[test]
fn validation_error_is_persisted_until_dismissed() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = start(dir.path());
        app.add_task("   ");
    }
    let mut app = start(dir.path());
    assert_eq!(app.state().error, "Task title cannot be empty");
    app.clear_error();

    let app = start(dir.path());
    assert!(!app.state().has_error());
}

// ---------------------------------------------------------------------------
// Keys, storage failure and reload
// ---------------------------------------------------------------------------

#[test]
fn custom_key_is_isolated() {
    let store = MemoryStore::new();
    let work = StatePersistence::with_key(&store, "work");
    let home = StatePersistence::with_key(&store, "home");

    let mut app = App::load(work, AppState::default());
    app.add_task("ship release");

    let other = App::load(home, AppState::default());
    assert!(other.state().tasks.is_empty());
    assert!(store.get("work").unwrap().is_some());
    assert!(store.get(STATE_KEY).unwrap().is_none());
}

#[test]
fn unreadable_store_at_startup_shows_fallback() {
    let store = MemoryStore::new();
    store.set_failing(true);
    let mut app = App::load(StatePersistence::new(store), AppState::default());
    assert!(app.fallback().is_some());
    assert!(app.state().tasks.is_empty());

    app.persistence().store().set_failing(false);
    app.reload();
    assert!(app.fallback().is_none());
}
