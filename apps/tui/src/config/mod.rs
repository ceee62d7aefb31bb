pub mod config;

pub use config::{get_base_url, get_repo_slug, init_app_config, CatalogConfig};
