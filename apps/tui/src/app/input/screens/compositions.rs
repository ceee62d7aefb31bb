use crate::app::input::helpers::move_selection;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_compositions_input(app: &mut App, key: KeyCode) {
    if app.compositions_view.search_active {
        handle_search_input(app, key);
        return;
    }

    let total = app.filtered_compositions().len();

    match key {
        KeyCode::Esc => {
            if !app.compositions_view.search_query.is_empty() {
                app.compositions_view.clear_search();
            } else {
                app.screen = AppScreen::Main;
            }
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('/') => app.compositions_view.search_active = true,
        KeyCode::Char('r') => app.reload_compositions(),
        KeyCode::Tab | KeyCode::Char('c') => {
            let facet_count = app.composition_facets().len();
            app.compositions_view.cycle_category(facet_count);
        }
        KeyCode::Enter => {
            let filtered = app.filtered_compositions();
            if let Some(&index) = filtered.get(app.compositions_view.selected_index) {
                app.detail_composition = Some(index);
                app.stage_index = 0;
                app.screen = AppScreen::CompositionDetails;
            }
        }
        KeyCode::Up => move_selection(&mut app.compositions_view.selected_index, total, -1),
        KeyCode::Down => move_selection(&mut app.compositions_view.selected_index, total, 1),
        KeyCode::PageUp => move_selection(&mut app.compositions_view.selected_index, total, -5),
        KeyCode::PageDown => move_selection(&mut app.compositions_view.selected_index, total, 5),
        KeyCode::Home => app.compositions_view.selected_index = 0,
        KeyCode::End => {
            if total > 0 {
                app.compositions_view.selected_index = total - 1;
            }
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.compositions_view.clear_search(),
        KeyCode::Enter => app.compositions_view.search_active = false,
        KeyCode::Backspace => {
            app.compositions_view.search_query.pop();
            app.compositions_view.selected_index = 0;
        }
        KeyCode::Char(ch) => {
            app.compositions_view.search_query.push(ch);
            app.compositions_view.selected_index = 0;
        }
        _ => {}
    }
}
