// App module for compress-catalog-tui
// Handles application state and business logic

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{AnchorHit, App, AppScreen, CollectionView, DatasetsPane, SubmitField};
