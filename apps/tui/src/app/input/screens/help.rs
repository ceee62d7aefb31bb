use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => app.running = false,
        _ => app.show_help = false,
    }
}
