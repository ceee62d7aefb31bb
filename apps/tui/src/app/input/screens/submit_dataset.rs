use crate::app::state::{App, AppScreen, SubmitField};
use crossterm::event::KeyCode;

pub fn handle_submit_input(app: &mut App, key: KeyCode) {
    match key {
        // Esc leaves the form intact for a later visit.
        KeyCode::Esc => app.screen = AppScreen::Datasets,
        KeyCode::Tab | KeyCode::Down => app.submit_field = app.submit_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.submit_field = app.submit_field.prev(),
        KeyCode::Enter => {
            if app.submit_field == SubmitField::Tags {
                app.submit_dataset();
            } else {
                app.submit_field = app.submit_field.next();
            }
        }
        KeyCode::Backspace => {
            app.submit_field_value_mut().pop();
        }
        KeyCode::Char(ch) => {
            app.submit_field_value_mut().push(ch);
        }
        _ => {}
    }
}
