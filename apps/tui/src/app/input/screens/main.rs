use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub const MENU_ENTRIES: [&str; 5] = [
    "Modules",
    "Compositions",
    "Datasets",
    "Submit a dataset",
    "Quit",
];

pub fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('r') => {
            app.reload_all();
        }
        KeyCode::Up => {
            app.menu_index = wrap_decrement(app.menu_index, MENU_ENTRIES.len());
        }
        KeyCode::Down => {
            app.menu_index = wrap_increment(app.menu_index, MENU_ENTRIES.len());
        }
        KeyCode::Enter => match app.menu_index {
            0 => enter(app, AppScreen::Modules),
            1 => enter(app, AppScreen::Compositions),
            2 => enter(app, AppScreen::Datasets),
            3 => enter(app, AppScreen::SubmitDataset),
            _ => app.running = false,
        },
        _ => {}
    }
}

fn enter(app: &mut App, screen: AppScreen) {
    app.ensure_screen_data(screen);
    app.screen = screen;
}
