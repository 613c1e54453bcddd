//! A single row of the task list.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};
use tasklist_core::Task;

use super::theme::Palette;

/// Formats a creation time in local time.
///
/// An invalid chrono format string yields `"??"` rather than panicking.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.with_timezone(&Local).format(format)).is_err() {
        return "??".to_string();
    }
    out
}

/// Checkbox glyph for a task.
#[must_use]
pub const fn checkbox(task: &Task) -> &'static str {
    if task.is_completed {
        "[\u{2713}]"
    } else {
        "[ ]"
    }
}

/// Build the list row for `task`.
#[must_use]
pub fn list_item<'a>(task: &'a Task, palette: &Palette, timestamp_format: &str) -> ListItem<'a> {
    let (box_style, title_style) = if task.is_completed {
        (palette.normal().fg(palette.success), palette.completed())
    } else {
        (palette.normal(), palette.normal())
    };

    let line = Line::from(vec![
        Span::styled(checkbox(task), box_style),
        Span::raw(" "),
        Span::styled(task.title.as_str(), title_style),
        Span::raw("  "),
        Span::styled(
            format_timestamp(&task.created_at, timestamp_format),
            palette.dimmed(),
        ),
    ]);

    ListItem::new(line)
}
