use crate::app::App;
use crate::ui::screens::module_details::format_paper;
use crate::ui::screens::{render_footer, selection_style};
use crate::ui::widgets::colors::{composition_category_color, compression_type_color};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_composition_details(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(f.area());

    let Some(composition) = app
        .detail_composition
        .and_then(|index| app.compositions.items.get(index))
    else {
        let paragraph = Paragraph::new("Composition no longer available.")
            .block(Block::default().title(" Composition ").borders(Borders::ALL));
        f.render_widget(paragraph, chunks[0]);
        render_footer(f, chunks[1], &[("Esc", "Back"), ("q", "Quit")]);
        return;
    };

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled(
                composition.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                composition.category.clone(),
                Style::default().fg(composition_category_color(&composition.category)),
            ),
            Span::raw("  "),
            Span::styled(
                composition.compression_type.clone().unwrap_or_default(),
                Style::default().fg(compression_type_color(
                    composition.compression_type.as_deref().unwrap_or_default(),
                )),
            ),
        ]),
        TextLine::from(""),
        TextLine::from(Span::raw(composition.description.clone())),
        TextLine::from(""),
        section_header("Pipeline stages"),
    ];

    for (index, stage) in composition.stages.iter().enumerate() {
        let resolved = stage
            .module_id
            .as_deref()
            .and_then(|key| app.module_index_by_key(key))
            .is_some();

        let mut label = format!("  {}. {}", index + 1, stage.name);
        if stage.optional {
            label.push_str(" [optional]");
        }
        if resolved {
            label.push_str("  -> module");
        }
        let style = if index == app.stage_index {
            selection_style(false)
        } else if resolved {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(TextLine::from(Span::styled(label, style)));
        if !stage.description.is_empty() {
            lines.push(TextLine::from(Span::styled(
                format!("     {}", stage.description),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if let Some(note) = &stage.note {
            lines.push(TextLine::from(Span::styled(
                format!("     note: {note}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if !composition.capabilities.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(section_header("Capabilities"));
        for capability in &composition.capabilities {
            lines.push(TextLine::from(format!(
                "  - {}: {}",
                capability.name, capability.description
            )));
        }
    }

    if !composition.used_in.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(section_header("Used in"));
        lines.push(TextLine::from(format!("  {}", composition.used_in.join(", "))));
    }

    if let Some(link) = &composition.link {
        lines.push(TextLine::from(""));
        lines.push(section_header("Link"));
        lines.push(TextLine::from(format!("  {link}")));
    }

    if !composition.papers.is_empty() {
        lines.push(TextLine::from(""));
        lines.push(section_header("Papers"));
        for paper in &composition.papers {
            lines.push(TextLine::from(format!("  - {}", format_paper(paper))));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!(" Composition: {} ", composition.key()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);
    render_footer(
        f,
        chunks[1],
        &[
            ("↑/↓", "Stage"),
            ("Enter", "Open stage module"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
    );
}

fn section_header(label: &str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
}
