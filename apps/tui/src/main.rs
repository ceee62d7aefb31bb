mod app;
mod assets;
mod catalog;
mod cli;
mod config;
mod domain;
mod event;
mod terminal;
mod ui;

use app::actions::AppActions;
use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    env_logger::init();

    let catalog_config = config::init_app_config();
    let mut app = App::new(AppActions::new(catalog_config));
    app.pending_anchor = args.goto;

    // No terminal attached, or explicitly requested: print stats and exit.
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
