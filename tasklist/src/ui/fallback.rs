//! Error screen shown when storage fails.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme::Palette;
use crate::app::Fallback;

/// Render the fallback screen centred in `area`.
pub fn render(frame: &mut Frame, area: Rect, fallback: &Fallback, palette: &Palette) {
    let [row] = Layout::vertical([Constraint::Length(9)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Max(70)])
        .flex(Flex::Center)
        .areas(row);

    let text = vec![
        Line::from(Span::styled("Oops! Something went wrong.", palette.error())),
        Line::from(""),
        Line::from(Span::styled(fallback.message.as_str(), palette.normal())),
        Line::from(""),
        Line::from(vec![
            Span::styled("r", palette.highlighted()),
            Span::styled(": reload saved tasks  ", palette.dimmed()),
            Span::styled("q", palette.highlighted()),
            Span::styled(": quit", palette.dimmed()),
        ]),
    ];

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(palette.error());

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .style(palette.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}
