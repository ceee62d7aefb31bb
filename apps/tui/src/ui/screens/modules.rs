use crate::app::App;
use crate::ui::screens::{render_footer, render_status, selection_style};
use crate::ui::widgets::colors::module_category_color;
use crate::ui::widgets::tables::{list_title, scroll_offset};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// One visible table row of the grouped module view: either a category
/// bucket header or a module from that bucket.
enum DisplayRow {
    Header { name: String, count: usize },
    Item { module_index: usize, selected: bool },
}

pub fn render_modules_view(app: &mut App, f: &mut Frame<'_>) {
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
    render_grouped_table(app, f, chunks[1]);

    let error = app.modules.error.clone();
    let loading = app.modules.loading;
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

fn render_filter_bar(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let query = if app.modules_view.search_active {
        format!("{}_", app.modules_view.search_query)
    } else if app.modules_view.search_query.is_empty() {
        "(press / to search)".to_string()
    } else {
        app.modules_view.search_query.clone()
    };

    let line = TextLine::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(query, Style::default().fg(Color::White)),
        Span::styled("    Category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.selected_module_category(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Filter "));
    f.render_widget(bar, area);
}

fn render_grouped_table(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let filtered = app.filtered_modules();
    let total = app.modules.items.len();
    let title = list_title("Modules", filtered.len(), total);

    if filtered.is_empty() {
        let text = if app.modules.loading && total == 0 {
            "Loading modules..."
        } else if total == 0 {
            "No modules loaded."
        } else {
            "No results. Adjust the search or category filter."
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().title(title).borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    // Flatten the category buckets into display rows, tracking which row is
    // selected (selection counts items only, never headers).
    let groups = app.module_groups();
    let mut rows: Vec<DisplayRow> = Vec::new();
    let mut item_position = 0;
    let mut selected_row = 0;
    for group in &groups {
        rows.push(DisplayRow::Header {
            name: group.name.clone(),
            count: group.count(),
        });
        for &module_index in &group.indices {
            let selected = item_position == app.modules_view.selected_index;
            if selected {
                selected_row = rows.len();
            }
            rows.push(DisplayRow::Item {
                module_index,
                selected,
            });
            item_position += 1;
        }
    }

    let max_visible = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(rows.len(), max_visible, selected_row);
    let highlight = app.highlight_active();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Tags"),
        Cell::from("Description"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows = rows.iter().skip(offset).take(max_visible).map(|row| match row {
        DisplayRow::Header { name, count } => Row::new(vec![
            Cell::from(format!("▾ {name} ({count})")),
            Cell::from(""),
            Cell::from(""),
        ])
        .style(
            Style::default()
                .fg(module_category_color(name))
                .add_modifier(Modifier::BOLD),
        ),
        DisplayRow::Item {
            module_index,
            selected,
        } => {
            let module = &app.modules.items[*module_index];
            let style = if *selected {
                selection_style(highlight)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(format!("  {}", module.name)),
                Cell::from(module.tags.join(", ")),
                Cell::from(module.description.clone()),
            ])
            .style(style)
        }
    });

    let widths = [
        Constraint::Length(26),
        Constraint::Length(24),
        Constraint::Min(20),
    ];
    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1);
    f.render_widget(table, area);
}
