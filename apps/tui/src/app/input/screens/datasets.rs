use crate::app::input::helpers::move_selection;
use crate::app::state::{App, AppScreen, DatasetsPane};
use crossterm::event::KeyCode;

pub fn handle_datasets_input(app: &mut App, key: KeyCode) {
    if app.datasets_view.search_active {
        handle_search_input(app, key);
        return;
    }

    match key {
        KeyCode::Esc => {
            if !app.datasets_view.search_query.is_empty() {
                app.datasets_view.clear_search();
            } else {
                app.screen = AppScreen::Main;
            }
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        // Search applies to the community list; the benchmark table is
        // opaque display data.
        KeyCode::Char('/') => {
            app.datasets_pane = DatasetsPane::Community;
            app.datasets_view.search_active = true;
        }
        KeyCode::Char('r') => app.reload_datasets(),
        KeyCode::Char('s') => app.screen = AppScreen::SubmitDataset,
        KeyCode::Tab => {
            app.datasets_pane = match app.datasets_pane {
                DatasetsPane::Community => DatasetsPane::Benchmark,
                DatasetsPane::Benchmark => DatasetsPane::Community,
            };
        }
        KeyCode::Up => navigate(app, -1),
        KeyCode::Down => navigate(app, 1),
        KeyCode::PageUp => navigate(app, -5),
        KeyCode::PageDown => navigate(app, 5),
        KeyCode::Home => match app.datasets_pane {
            DatasetsPane::Community => app.datasets_view.selected_index = 0,
            DatasetsPane::Benchmark => app.benchmark_index = 0,
        },
        KeyCode::End => match app.datasets_pane {
            DatasetsPane::Community => {
                let total = app.filtered_datasets().len();
                if total > 0 {
                    app.datasets_view.selected_index = total - 1;
                }
            }
            DatasetsPane::Benchmark => {
                let total = app.benchmarks.items.len();
                if total > 0 {
                    app.benchmark_index = total - 1;
                }
            }
        },
        _ => {}
    }
}

fn navigate(app: &mut App, delta: isize) {
    match app.datasets_pane {
        DatasetsPane::Community => {
            let total = app.filtered_datasets().len();
            move_selection(&mut app.datasets_view.selected_index, total, delta);
        }
        DatasetsPane::Benchmark => {
            let total = app.benchmarks.items.len();
            move_selection(&mut app.benchmark_index, total, delta);
        }
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.datasets_view.clear_search(),
        KeyCode::Enter => app.datasets_view.search_active = false,
        KeyCode::Backspace => {
            app.datasets_view.search_query.pop();
            app.datasets_view.selected_index = 0;
        }
        KeyCode::Char(ch) => {
            app.datasets_view.search_query.push(ch);
            app.datasets_view.selected_index = 0;
        }
        _ => {}
    }
}
