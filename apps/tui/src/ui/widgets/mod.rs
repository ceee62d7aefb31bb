pub mod colors;
pub mod popup;
pub mod tables;
