pub mod composition_details;
pub mod compositions;
pub mod datasets;
pub mod help;
pub mod main;
pub mod module_details;
pub mod modules;
pub mod submit_dataset;

use crate::app::App;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

/// Shared bottom help line: `key: action` pairs.
pub fn render_footer(f: &mut Frame<'_>, area: Rect, entries: &[(&str, &str)]) {
    let mut spans: Vec<Span<'_>> = Vec::with_capacity(entries.len() * 2);
    for (key, action) in entries {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(": {action}   ")));
    }

    let paragraph = Paragraph::new(TextLine::from(spans))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Shared status line: error banner first, then the loading spinner, then
/// the latest status message.
pub fn render_status(app: &mut App, f: &mut Frame<'_>, area: Rect, error: Option<&str>, loading: bool) {
    if let Some(error) = error {
        let banner = Paragraph::new(TextLine::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
        f.render_widget(banner, area);
        return;
    }

    if loading {
        let spinner = Throbber::default()
            .label("Loading catalog data...")
            .style(Style::default().fg(Color::Cyan));
        f.render_stateful_widget(spinner, area, &mut app.throbber);
        return;
    }

    let message = Paragraph::new(TextLine::from(Span::raw(format!("  {}", app.status_message))))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

/// Style for the currently selected table row; the deep-link highlight
/// temporarily overrides the normal selection color.
pub fn selection_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}
