use crate::app::input::helpers::move_selection;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_modules_input(app: &mut App, key: KeyCode) {
    if app.modules_view.search_active {
        handle_search_input(app, key);
        return;
    }

    let total = app.filtered_modules().len();

    match key {
        KeyCode::Esc => {
            if !app.modules_view.search_query.is_empty() {
                app.modules_view.clear_search();
            } else {
                app.screen = AppScreen::Main;
            }
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('/') => app.modules_view.search_active = true,
        KeyCode::Char('r') => app.reload_modules(),
        KeyCode::Tab | KeyCode::Char('c') => {
            let facet_count = app.module_facets().len();
            app.modules_view.cycle_category(facet_count);
        }
        KeyCode::Enter => {
            let filtered = app.filtered_modules();
            if let Some(&index) = filtered.get(app.modules_view.selected_index) {
                app.detail_module = Some(index);
                app.screen = AppScreen::ModuleDetails;
            }
        }
        KeyCode::Up => move_selection(&mut app.modules_view.selected_index, total, -1),
        KeyCode::Down => move_selection(&mut app.modules_view.selected_index, total, 1),
        KeyCode::PageUp => move_selection(&mut app.modules_view.selected_index, total, -5),
        KeyCode::PageDown => move_selection(&mut app.modules_view.selected_index, total, 5),
        KeyCode::Home => app.modules_view.selected_index = 0,
        KeyCode::End => {
            if total > 0 {
                app.modules_view.selected_index = total - 1;
            }
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.modules_view.clear_search(),
        KeyCode::Enter => app.modules_view.search_active = false,
        KeyCode::Backspace => {
            app.modules_view.search_query.pop();
            app.modules_view.selected_index = 0;
        }
        KeyCode::Char(ch) => {
            app.modules_view.search_query.push(ch);
            app.modules_view.selected_index = 0;
        }
        _ => {}
    }
}
