use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "compress-catalog-tui", version, about = "Compression knowledge base TUI")]
pub struct CliArgs {
    /// Print catalog stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the asset base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the submission repo slug
    #[arg(long, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Jump to a catalog entry by id or name once its collection loads;
    /// in headless mode the lookup result is printed instead
    #[arg(long = "goto", value_name = "ID")]
    pub goto: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(base_url) = &self.base_url {
            std::env::set_var("CATALOG_BASE_URL", base_url);
        }
        if let Some(repo) = &self.repo {
            std::env::set_var("CATALOG_REPO", repo);
        }
        if self.debug {
            std::env::set_var("RUST_LOG", "debug");
        }
    }
}
