//! Colour palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};
use tasklist_core::Theme;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub bg: Color,
    /// Primary foreground.
    pub fg: Color,
    /// Secondary text (timestamps, hints, completed tasks).
    pub muted: Color,
    /// Focus and active-tab colour.
    pub accent: Color,
    /// Checkmarks.
    pub success: Color,
    /// Validation and storage errors.
    pub danger: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Status bar background.
    pub status_bg: Color,
}

impl Palette {
    /// Light theme palette.
    pub const LIGHT: Self = Self {
        bg: Color::Rgb(248, 249, 250),
        fg: Color::Rgb(33, 37, 41),
        muted: Color::Rgb(108, 117, 125),
        accent: Color::Rgb(0, 123, 255),
        success: Color::Rgb(40, 167, 69),
        danger: Color::Rgb(220, 53, 69),
        border: Color::Rgb(206, 212, 218),
        status_bg: Color::Rgb(233, 236, 239),
    };

    /// Dark theme palette.
    pub const DARK: Self = Self {
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(230, 230, 235),
        muted: Color::Rgb(130, 135, 150),
        accent: Color::Rgb(97, 175, 239),
        success: Color::Rgb(120, 200, 120),
        danger: Color::Rgb(240, 100, 110),
        border: Color::Rgb(70, 72, 90),
        status_bg: Color::Rgb(30, 30, 50),
    };

    /// Palette for `theme`.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    /// Base style filling the screen.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Normal text style.
    #[must_use]
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Dimmed text style (timestamps, metadata).
    #[must_use]
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Bold text style.
    #[must_use]
    pub fn bold(&self) -> Style {
        self.normal().add_modifier(Modifier::BOLD)
    }

    /// Highlighted text style (focused panel borders, active tab).
    #[must_use]
    pub fn highlighted(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Selected list row.
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row while the list is not focused.
    #[must_use]
    pub fn selected_unfocused(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Completed task title.
    #[must_use]
    pub fn completed(&self) -> Style {
        self.dimmed().add_modifier(Modifier::CROSSED_OUT)
    }

    /// Error text.
    #[must_use]
    pub fn error(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    /// Panel border, accented when focused.
    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.highlighted()
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Status bar background.
    #[must_use]
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.fg).bg(self.status_bg)
    }
}
