use crate::app::input::helpers::move_selection;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_composition_details_input(app: &mut App, key: KeyCode) {
    let stage_count = app
        .detail_composition
        .and_then(|index| app.compositions.items.get(index))
        .map_or(0, |composition| composition.stages.len());

    match key {
        KeyCode::Esc | KeyCode::Backspace => {
            app.detail_composition = None;
            app.screen = AppScreen::Compositions;
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Up => move_selection(&mut app.stage_index, stage_count, -1),
        KeyCode::Down => move_selection(&mut app.stage_index, stage_count, 1),
        // Jump to the module backing the selected stage, when it resolves.
        KeyCode::Enter | KeyCode::Char('m') => {
            let module_index = app
                .detail_composition
                .and_then(|index| app.compositions.items.get(index))
                .and_then(|composition| composition.stages.get(app.stage_index))
                .and_then(|stage| stage.module_id.as_deref())
                .and_then(|key| app.module_index_by_key(key));

            if let Some(index) = module_index {
                app.detail_composition = None;
                app.jump_to_module(index);
            }
        }
        _ => {}
    }
}
