use crate::app::App;
use crate::ui::screens::{render_footer, render_status, selection_style};
use crate::ui::widgets::colors::composition_category_color;
use crate::ui::widgets::tables::{list_title, scroll_offset};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_compositions_view(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_filter_bar(app, f, chunks[0]);
    render_table(app, f, chunks[1]);

    let error = app.compositions.error.clone();
    let loading = app.compositions.loading;
    render_status(app, f, chunks[2], error.as_deref(), loading);
    render_footer(
        f,
        chunks[3],
        &[
            ("/", "Search"),
            ("Tab", "Category"),
            ("Enter", "Details"),
            ("r", "Reload"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
    );
}

fn render_filter_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let query = if app.compositions_view.search_active {
        format!("{}_", app.compositions_view.search_query)
    } else if app.compositions_view.search_query.is_empty() {
        "(press / to search)".to_string()
    } else {
        app.compositions_view.search_query.clone()
    };

    let line = TextLine::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(query, Style::default().fg(Color::White)),
        Span::styled("    Category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.selected_composition_category(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Filter "));
    f.render_widget(bar, area);
}

fn render_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let filtered = app.filtered_compositions();
    let total = app.compositions.items.len();
    let title = list_title("Compositions", filtered.len(), total);

    if filtered.is_empty() {
        let text = if app.compositions.loading && total == 0 {
            "Loading compositions..."
        } else if total == 0 {
            "No compositions loaded."
        } else {
            "No results. Adjust the search or category filter."
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().title(title).borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let max_visible = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(filtered.len(), max_visible, app.compositions_view.selected_index);
    let highlight = app.highlight_active();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from("Type"),
        Cell::from("Stages"),
        Cell::from("Description"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = filtered
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .map(|(position, &index)| {
            let composition = &app.compositions.items[index];
            let style = if position == app.compositions_view.selected_index {
                selection_style(highlight)
            } else {
                Style::default().fg(composition_category_color(&composition.category))
            };
            Row::new(vec![
                Cell::from(composition.name.clone()),
                Cell::from(composition.category.clone()),
                Cell::from(composition.compression_type.clone().unwrap_or_default()),
                Cell::from(composition.stages.len().to_string()),
                Cell::from(composition.description.clone()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(22),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Min(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1);
    f.render_widget(table, area);
}
