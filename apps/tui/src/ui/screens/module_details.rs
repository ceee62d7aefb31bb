use crate::app::App;
use crate::ui::screens::render_footer;
use crate::ui::widgets::colors::module_category_color;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_module_details(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(f.area());

    let Some(module) = app.detail_module.and_then(|index| app.modules.items.get(index)) else {
        let paragraph = Paragraph::new("Module no longer available.")
            .block(Block::default().title(" Module ").borders(Borders::ALL));
        f.render_widget(paragraph, chunks[0]);
        render_footer(f, chunks[1], &[("Esc", "Back"), ("q", "Quit")]);
        return;
    };

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled(
                module.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                module.category.clone(),
                Style::default().fg(module_category_color(&module.category)),
            ),
        ]),
        TextLine::from(""),
        TextLine::from(Span::raw(module.description.clone())),
    ];

    if !module.features.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(section_header("Features"));
        for feature in &module.features {
            lines.push(TextLine::from(format!("  - {feature}")));
        }
    }

    if !module.tags.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(section_header("Tags"));
        lines.push(TextLine::from(format!("  {}", module.tags.join(", "))));
    }

    if !module.papers.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(section_header("Papers"));
        for paper in &module.papers {
            lines.push(TextLine::from(format!("  - {}", format_paper(paper))));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!(" Module: {} ", module.key()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);
    render_footer(f, chunks[1], &[("Esc", "Back"), ("q", "Quit")]);
}

fn section_header(label: &str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn format_paper(paper: &crate::assets::models::ReferencePaper) -> String {
    let mut parts = vec![paper.title.clone()];
    if let Some(authors) = &paper.authors {
        parts.push(authors.clone());
    }
    if let Some(year) = paper.year {
        parts.push(year.to_string());
    }
    if let Some(doi) = &paper.doi {
        parts.push(format!("doi:{doi}"));
    }
    if let Some(note) = &paper.note {
        parts.push(format!("({note})"));
    }
    parts.join(", ")
}
