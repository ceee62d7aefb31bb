use dotenv::dotenv;
use std::env;

/// Default asset host when no override is configured. The catalog assets are
/// published as static JSON next to the web front-end.
pub const DEFAULT_BASE_URL: &str = "https://szcompressor.github.io/compress-catalog";

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL the asset candidates are built against. May carry a path
    /// prefix (GitHub Pages project sites do).
    pub base_url: String,
    /// Explicit "owner/repo" slug for dataset submissions, when configured.
    pub repo_slug: Option<String>,
}

/// Initializes the application configuration from `.env` and the environment.
pub fn init_app_config() -> CatalogConfig {
    // Load environment variables from .env file
    dotenv().ok();

    CatalogConfig {
        base_url: get_base_url(),
        repo_slug: get_repo_slug(),
    }
}

/// Gets the asset base URL, without a trailing slash.
pub fn get_base_url() -> String {
    env::var("CATALOG_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Gets the configured submission repo slug, if any.
pub fn get_repo_slug() -> Option<String> {
    env::var("CATALOG_REPO")
        .ok()
        .map(|slug| slug.trim().trim_matches('/').to_string())
        .filter(|slug| !slug.is_empty())
}
