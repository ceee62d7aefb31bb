use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let entries = [
        ("↑/↓, PgUp/PgDn, Home/End", "Navigate lists"),
        ("/", "Incremental search (Esc clears)"),
        ("Tab or c", "Cycle the category filter"),
        ("Enter", "Open details / next form field"),
        ("r", "Reload the current collection"),
        ("s", "Dataset submission form (datasets screen)"),
        ("Esc", "Back"),
        ("q", "Quit"),
    ];

    let mut lines = vec![TextLine::from(""), TextLine::from("")];
    for (key, action) in entries {
        lines.push(TextLine::from(vec![
            Span::styled(
                format!("  {key:<28}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(action),
        ]));
    }
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left);
    f.render_widget(popup, area);
}
