pub mod composition_details;
pub mod compositions;
pub mod datasets;
pub mod help;
pub mod main;
pub mod module_details;
pub mod modules;
pub mod submit_dataset;

use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        help::handle_help_input(app, key);
        return;
    }

    match app.screen {
        AppScreen::Main => main::handle_main_input(app, key),
        AppScreen::Modules => modules::handle_modules_input(app, key),
        AppScreen::Compositions => compositions::handle_compositions_input(app, key),
        AppScreen::Datasets => datasets::handle_datasets_input(app, key),
        AppScreen::ModuleDetails => module_details::handle_module_details_input(app, key),
        AppScreen::CompositionDetails => {
            composition_details::handle_composition_details_input(app, key);
        }
        AppScreen::SubmitDataset => submit_dataset::handle_submit_input(app, key),
    }
}
