// UI module for compress-catalog-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Main => screens::main::render_main(app, f),
        AppScreen::Modules => screens::modules::render_modules_view(app, f),
        AppScreen::Compositions => screens::compositions::render_compositions_view(app, f),
        AppScreen::Datasets => screens::datasets::render_datasets_view(app, f),
        AppScreen::ModuleDetails => screens::module_details::render_module_details(app, f),
        AppScreen::CompositionDetails => {
            screens::composition_details::render_composition_details(app, f);
        }
        AppScreen::SubmitDataset => screens::submit_dataset::render_submit_dataset(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}
