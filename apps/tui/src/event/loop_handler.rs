use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, AnchorHit, App};
use crate::catalog::facets::{facet_values, ALL_SENTINEL};
use crate::catalog::grouping::group_by_category;
use crate::ui;

/// Run the main application event loop.
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Event poll timeout (ms); also paces the spinner and timers.
    const EVENT_POLL_TIMEOUT: u64 = 50;

    app.reload_all();

    loop {
        app.tick();

        // Apply load completions before drawing; stale generations are
        // discarded inside the state.
        for load_event in app.actions.drain_events() {
            app.apply_load_event(load_event);
        }

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}

/// Run without a terminal: fetch everything once and print catalog stats.
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let stats = build_headless_stats(app).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nCompression Catalog");
    println!("===================");
    println!("Modules: {}", stats.total_modules);
    println!("Compositions: {}", stats.total_compositions);
    println!("Community datasets: {}", stats.total_datasets);
    println!(
        "Benchmark datasets: {}{}",
        stats.total_benchmarks,
        if stats.benchmarks_from_embedded {
            " (embedded)"
        } else {
            ""
        }
    );

    println!("\nModules by category:");
    for (category, count) in &stats.modules_by_category {
        println!("- {category}: {count}");
    }

    println!("\nComposition categories:");
    for category in &stats.composition_categories {
        println!("- {category}");
    }

    if let Some(anchor) = &stats.anchor {
        match &stats.anchor_match {
            Some(hit) => println!("\nEntry `{anchor}`: {hit}"),
            None => println!("\nEntry `{anchor}`: not found"),
        }
    }

    if !stats.errors.is_empty() {
        println!("\nLoad errors:");
        for error in &stats.errors {
            println!("- {error}");
        }
    }
}

async fn build_headless_stats(app: &mut App) -> HeadlessStats {
    let mut errors = Vec::new();

    match app.actions.fetch_modules().await {
        Ok(modules) => app.modules.items = modules,
        Err(err) => errors.push(format!("modules: {err}")),
    }
    match app.actions.fetch_compositions().await {
        Ok(compositions) => app.compositions.items = compositions,
        Err(err) => errors.push(format!("compositions: {err}")),
    }
    match app.actions.fetch_datasets().await {
        Ok(datasets) => app.datasets.items = datasets,
        Err(err) => errors.push(format!("datasets: {err}")),
    }
    // Optional override; embedded defaults stand on failure or empty payload.
    let mut benchmarks_from_embedded = true;
    match app.actions.fetch_benchmarks().await {
        Ok(benchmarks) if !benchmarks.is_empty() => {
            app.benchmarks.items = benchmarks;
            benchmarks_from_embedded = false;
        }
        Ok(_) | Err(_) => {}
    }

    let all: Vec<usize> = (0..app.modules.items.len()).collect();
    let modules_by_category =
        group_by_category(&app.modules.items, &all, |module| module.category.as_str())
            .into_iter()
            .map(|group| {
                let count = group.count();
                (group.name, count)
            })
            .collect();

    let mut composition_facets = facet_values(
        &app.compositions.items,
        |composition| composition.category.as_str(),
        ALL_SENTINEL,
    );
    // Drop the sentinel; headless output lists real categories only.
    let composition_categories = composition_facets.split_off(1);

    // A requested anchor is looked up against the fetched collections and
    // reported instead of jumped to.
    let anchor = app.pending_anchor.take();
    let anchor_match = anchor.as_deref().and_then(|anchor| {
        app.find_anchor(anchor).map(|hit| match hit {
            AnchorHit::Module(index) => format!("module {}", app.modules.items[index].name),
            AnchorHit::Composition(index) => {
                format!("composition {}", app.compositions.items[index].name)
            }
            AnchorHit::Dataset(index) => format!("dataset {}", app.datasets.items[index].name),
        })
    });

    HeadlessStats {
        total_modules: app.modules.items.len(),
        total_compositions: app.compositions.items.len(),
        total_datasets: app.datasets.items.len(),
        total_benchmarks: app.benchmarks.items.len(),
        benchmarks_from_embedded,
        modules_by_category,
        composition_categories,
        anchor,
        anchor_match,
        errors,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    total_modules: usize,
    total_compositions: usize,
    total_datasets: usize,
    total_benchmarks: usize,
    benchmarks_from_embedded: bool,
    modules_by_category: Vec<(String, usize)>,
    composition_categories: Vec<String>,
    anchor: Option<String>,
    anchor_match: Option<String>,
    errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::AppActions;
    use crate::config::CatalogConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_against(server: &MockServer) -> App {
        App::new(AppActions::new(CatalogConfig {
            base_url: server.uri(),
            repo_slug: None,
        }))
    }

    #[tokio::test]
    async fn headless_stats_report_the_requested_anchor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/modules.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "m1", "name": "RLE", "category": "Encoder"}
            ])))
            .mount(&server)
            .await;

        let mut app = app_against(&server);
        app.pending_anchor = Some("m1".to_string());
        let stats = build_headless_stats(&mut app).await;

        assert_eq!(stats.total_modules, 1);
        assert_eq!(stats.anchor.as_deref(), Some("m1"));
        assert_eq!(stats.anchor_match.as_deref(), Some("module RLE"));
        assert!(app.pending_anchor.is_none());
    }

    #[tokio::test]
    async fn headless_stats_mark_an_unmatched_anchor() {
        let server = MockServer::start().await;

        let mut app = app_against(&server);
        app.pending_anchor = Some("nope".to_string());
        let stats = build_headless_stats(&mut app).await;

        assert_eq!(stats.anchor.as_deref(), Some("nope"));
        assert!(stats.anchor_match.is_none());
    }
}
