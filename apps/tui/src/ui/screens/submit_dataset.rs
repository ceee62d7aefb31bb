use crate::app::state::SubmitField;
use crate::app::App;
use crate::ui::screens::{render_footer, render_status};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_submit_dataset(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_form(app, f, chunks[0]);
    render_status(app, f, chunks[1], None, false);
    render_footer(
        f,
        chunks[2],
        &[
            ("Tab/↑/↓", "Field"),
            ("Enter", "Next / submit on Tags"),
            ("Esc", "Back"),
        ],
    );
}

fn render_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Contribute a benchmark dataset. Submitting opens a prefilled GitHub issue;",
            Style::default().fg(Color::DarkGray),
        )),
        TextLine::from(Span::styled(
            "nothing is stored locally.",
            Style::default().fg(Color::DarkGray),
        )),
        TextLine::from(""),
    ];

    for field in SubmitField::ORDER {
        let focused = field == app.submit_field;
        let marker = if focused { "> " } else { "  " };
        let value = app.submit_field_value(field);
        let shown = if focused {
            format!("{value}_")
        } else {
            value.to_string()
        };

        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(TextLine::from(vec![
            Span::styled(format!("{marker}{:<12}", field.label()), label_style),
            Span::styled(shown, Style::default().fg(Color::White)),
        ]));
        lines.push(TextLine::from(""));
    }

    let form = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Submit a dataset ")
            .title_style(Style::default().fg(Color::Green))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(form, area);
}
