use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_module_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Backspace => {
            app.detail_module = None;
            app.screen = AppScreen::Modules;
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}
