// Export our modules for use in binaries and tests
pub mod assets;
pub mod catalog;
pub mod config;
pub mod domain;

pub use domain::{CompositionCategory, CompressionType, ModuleCategory};
