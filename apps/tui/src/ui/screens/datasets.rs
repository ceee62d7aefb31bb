use crate::app::state::DatasetsPane;
use crate::app::App;
use crate::ui::screens::{render_footer, render_status, selection_style};
use crate::ui::widgets::tables::{list_title, scroll_offset};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_datasets_view(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(35),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_community_table(app, f, chunks[0]);
    render_benchmark_table(app, f, chunks[1]);

    let error = app.datasets.error.clone();
    // Shared indicator: clears only when both loads have settled.
    let loading = app.datasets.loading || app.benchmarks.loading;
    render_status(app, f, chunks[2], error.as_deref(), loading);
    render_footer(
        f,
        chunks[3],
        &[
            ("/", "Search"),
            ("Tab", "Switch pane"),
            ("s", "Submit dataset"),
            ("r", "Reload"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
    );
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_community_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.datasets_pane == DatasetsPane::Community;
    let filtered = app.filtered_datasets();
    let total = app.datasets.items.len();

    let mut label = list_title("Community datasets", filtered.len(), total);
    if !app.datasets_view.search_query.is_empty() || app.datasets_view.search_active {
        label = format!("{label}- search: {}_", app.datasets_view.search_query);
    }

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(pane_border(focused));

    if filtered.is_empty() {
        let text = if app.datasets.loading && total == 0 {
            "Loading community datasets..."
        } else if total == 0 {
            "No community datasets loaded."
        } else {
            "No results for this search."
        };
        let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let max_visible = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(filtered.len(), max_visible, app.datasets_view.selected_index);
    let highlight = app.highlight_active();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Size"),
        Cell::from("Tags"),
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
            let dataset = &app.datasets.items[index];
            let style = if focused && position == app.datasets_view.selected_index {
                selection_style(highlight)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(dataset.name.clone()),
                Cell::from(dataset.size.clone()),
                Cell::from(dataset.tags.join(", ")),
                Cell::from(dataset.description.clone()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(24),
        Constraint::Length(10),
        Constraint::Length(20),
        Constraint::Min(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_benchmark_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.datasets_pane == DatasetsPane::Benchmark;
    let total = app.benchmarks.items.len();

    let block = Block::default()
        .title(format!(" SDRBench datasets ({total}) "))
        .borders(Borders::ALL)
        .border_style(pane_border(focused));

    let max_visible = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total, max_visible, app.benchmark_index);

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Type"),
        Cell::from("Format"),
        Cell::from("Size"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app
        .benchmarks
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .map(|(position, dataset)| {
            let style = if focused && position == app.benchmark_index {
                selection_style(false)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(dataset.name.clone()),
                Cell::from(dataset.kind.clone()),
                Cell::from(dataset.format.clone()),
                Cell::from(dataset.size.clone()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(18),
        Constraint::Length(30),
        Constraint::Min(24),
        Constraint::Length(22),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}
