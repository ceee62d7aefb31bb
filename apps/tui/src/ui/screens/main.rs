use crate::app::input::screens::main::MENU_ENTRIES;
use crate::app::App;
use crate::ui::screens::{render_footer, render_status};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_main(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title area
            Constraint::Min(7),    // Menu
            Constraint::Length(3), // Status area
            Constraint::Length(2), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title_section(f, chunks[0]);
    render_menu(app, f, chunks[1]);

    let error = first_error(app);
    render_status(app, f, chunks[2], error.as_deref(), false);
    render_footer(
        f,
        chunks[3],
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "Open"),
            ("r", "Reload all"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    );
}

fn first_error(app: &App) -> Option<String> {
    app.modules
        .error
        .as_ref()
        .or(app.compositions.error.as_ref())
        .or(app.datasets.error.as_ref())
        .cloned()
}

fn render_title_section(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Compression Catalog ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(title_block, area);

    let inner = area.inner(Margin::new(1, 1));
    let subtitle = Paragraph::new(Text::from(vec![
        TextLine::from(vec![
            Span::styled(
                "Modules, compositions and benchmark datasets ",
                Style::default().fg(Color::White),
            ),
            Span::styled("for scientific data compression", Style::default().fg(Color::DarkGray)),
        ]),
        TextLine::from(Span::styled(
            "Data is fetched from the published catalog assets; the benchmark list works offline.",
            Style::default().fg(Color::DarkGray),
        )),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(subtitle, inner);
}

fn render_menu(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let counts = [
        app.modules.items.len(),
        app.compositions.items.len(),
        app.datasets.items.len() + app.benchmarks.items.len(),
    ];

    let lines: Vec<TextLine<'_>> = MENU_ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let marker = if index == app.menu_index { "> " } else { "  " };
            let count = counts
                .get(index)
                .filter(|&&count| count > 0)
                .map_or_else(String::new, |count| format!("  ({count})"));

            let style = if index == app.menu_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            TextLine::from(Span::styled(format!("{marker}{entry}{count}"), style))
        })
        .collect();

    let menu = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Browse ")
            .title_style(Style::default().fg(Color::Green))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(menu, area);
}
