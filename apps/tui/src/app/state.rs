use crate::app::actions::{AppActions, LoadOutcome};
use crate::assets::embedded::sdrbench_defaults;
use crate::assets::fetcher::LoadState;
use crate::assets::models::{BenchmarkDataset, CompositionRecord, DatasetRecord, ModuleRecord};
use crate::catalog::facets::{facet_values, ALL_SENTINEL};
use crate::catalog::grouping::{group_by_category, CategoryGroup};
use crate::catalog::search::filter_indices;
use crate::catalog::submission::{build_issue_url, open_in_browser, resolve_repo_slug, DatasetForm};
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

/// Settle delay before an anchor lookup, so the freshly loaded list has a
/// rendered frame behind it.
pub const ANCHOR_SETTLE_DELAY: Duration = Duration::from_millis(300);
/// How long the deep-link highlight stays on the target row.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Main,
    Modules,
    Compositions,
    Datasets,
    ModuleDetails,
    CompositionDetails,
    SubmitDataset,
}

/// Which pane of the datasets screen owns navigation keys.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DatasetsPane {
    Community,
    Benchmark,
}

/// Where a deep-link anchor landed: an index into the owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorHit {
    Module(usize),
    Composition(usize),
    Dataset(usize),
}

/// Field currently focused in the dataset submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitField {
    Name,
    Description,
    Links,
    Size,
    Tags,
}

impl SubmitField {
    pub const ORDER: [Self; 5] = [
        Self::Name,
        Self::Description,
        Self::Links,
        Self::Size,
        Self::Tags,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Links => "Links",
            Self::Size => "Size",
            Self::Tags => "Tags",
        }
    }

    pub fn position(self) -> usize {
        Self::ORDER.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Per-collection view state: incremental search, selected facet and the
/// current selection within the filtered list.
#[derive(Debug, Default)]
pub struct CollectionView {
    pub search_active: bool,
    pub search_query: String,
    pub category_index: usize,
    pub selected_index: usize,
}

impl CollectionView {
    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.selected_index = 0;
    }

    pub fn reset_filters(&mut self) {
        self.clear_search();
        self.category_index = 0;
    }

    pub fn cycle_category(&mut self, facet_count: usize) {
        if facet_count > 0 {
            self.category_index = (self.category_index + 1) % facet_count;
            self.selected_index = 0;
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    pub menu_index: usize,

    pub actions: AppActions,

    pub modules: LoadState<ModuleRecord>,
    pub compositions: LoadState<CompositionRecord>,
    pub datasets: LoadState<DatasetRecord>,
    pub benchmarks: LoadState<BenchmarkDataset>,

    pub modules_view: CollectionView,
    pub compositions_view: CollectionView,
    pub datasets_view: CollectionView,
    pub datasets_pane: DatasetsPane,
    pub benchmark_index: usize,

    pub detail_module: Option<usize>,
    pub detail_composition: Option<usize>,
    pub stage_index: usize,

    pub submit_form: DatasetForm,
    pub submit_field: SubmitField,

    pub pending_anchor: Option<String>,
    pub anchor_ready_at: Option<Instant>,
    pub highlight_until: Option<Instant>,

    pub throbber: ThrobberState,
}

impl App {
    pub fn new(actions: AppActions) -> Self {
        Self {
            running: true,
            screen: AppScreen::Main,
            show_help: false,
            status_message: String::new(),
            menu_index: 0,
            actions,
            modules: LoadState::default(),
            compositions: LoadState::default(),
            datasets: LoadState::default(),
            // The benchmark list works without the network at all.
            benchmarks: LoadState::with_items(sdrbench_defaults()),
            modules_view: CollectionView::default(),
            compositions_view: CollectionView::default(),
            datasets_view: CollectionView::default(),
            datasets_pane: DatasetsPane::Community,
            benchmark_index: 0,
            detail_module: None,
            detail_composition: None,
            stage_index: 0,
            submit_form: DatasetForm::default(),
            submit_field: SubmitField::Name,
            pending_anchor: None,
            anchor_ready_at: None,
            highlight_until: None,
            throbber: ThrobberState::default(),
        }
    }

    // ---- loading -----------------------------------------------------

    pub fn reload_modules(&mut self) {
        let generation = self.modules.begin();
        self.actions.spawn_load_modules(generation);
    }

    pub fn reload_compositions(&mut self) {
        let generation = self.compositions.begin();
        self.actions.spawn_load_compositions(generation);
    }

    /// The datasets screen issues both loads concurrently; neither blocks or
    /// cancels the other, and the shared spinner clears when both settle.
    pub fn reload_datasets(&mut self) {
        let generation = self.datasets.begin();
        self.actions.spawn_load_datasets(generation);
        let generation = self.benchmarks.begin();
        self.actions.spawn_load_benchmarks(generation);
    }

    pub fn reload_all(&mut self) {
        self.reload_modules();
        self.reload_compositions();
        self.reload_datasets();
    }

    /// Lazily loads the collection backing a screen on first entry.
    pub fn ensure_screen_data(&mut self, screen: AppScreen) {
        match screen {
            AppScreen::Modules | AppScreen::ModuleDetails => {
                if self.modules.items.is_empty() && !self.modules.loading {
                    self.reload_modules();
                }
            }
            AppScreen::Compositions | AppScreen::CompositionDetails => {
                if self.compositions.items.is_empty() && !self.compositions.loading {
                    self.reload_compositions();
                }
                if self.modules.items.is_empty() && !self.modules.loading {
                    // Stage cross-references resolve against modules.
                    self.reload_modules();
                }
            }
            AppScreen::Datasets => {
                if self.datasets.items.is_empty() && !self.datasets.loading {
                    self.reload_datasets();
                }
            }
            AppScreen::Main | AppScreen::SubmitDataset => {}
        }
    }

    pub fn apply_load_event(&mut self, event: crate::app::actions::LoadEvent) {
        match event.outcome {
            LoadOutcome::Modules(result) => self.modules.finish(event.generation, result),
            LoadOutcome::Compositions(result) => self.compositions.finish(event.generation, result),
            LoadOutcome::Datasets(result) => self.datasets.finish(event.generation, result),
            // Optional override: embedded defaults survive a total failure.
            LoadOutcome::Benchmarks(result) => {
                self.benchmarks.finish_override(event.generation, result);
            }
        }

        if self.pending_anchor.is_some() && self.anchor_ready_at.is_none() {
            self.anchor_ready_at = Some(Instant::now() + ANCHOR_SETTLE_DELAY);
        }
    }

    pub const fn any_loading(&self) -> bool {
        self.modules.loading
            || self.compositions.loading
            || self.datasets.loading
            || self.benchmarks.loading
    }

    // ---- derived views ----------------------------------------------

    pub fn module_facets(&self) -> Vec<String> {
        facet_values(&self.modules.items, |module| module.category.as_str(), ALL_SENTINEL)
    }

    pub fn composition_facets(&self) -> Vec<String> {
        facet_values(
            &self.compositions.items,
            |composition| composition.category.as_str(),
            ALL_SENTINEL,
        )
    }

    fn selected_facet(facets: &[String], index: usize) -> &str {
        facets
            .get(index.min(facets.len().saturating_sub(1)))
            .map_or(ALL_SENTINEL, String::as_str)
    }

    pub fn selected_module_category(&self) -> String {
        Self::selected_facet(&self.module_facets(), self.modules_view.category_index).to_string()
    }

    pub fn selected_composition_category(&self) -> String {
        Self::selected_facet(&self.composition_facets(), self.compositions_view.category_index)
            .to_string()
    }

    pub fn filtered_modules(&self) -> Vec<usize> {
        filter_indices(
            &self.modules.items,
            &self.modules_view.search_query,
            &self.selected_module_category(),
            ALL_SENTINEL,
        )
    }

    pub fn module_groups(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.modules.items, &self.filtered_modules(), |module| {
            module.category.as_str()
        })
    }

    pub fn filtered_compositions(&self) -> Vec<usize> {
        filter_indices(
            &self.compositions.items,
            &self.compositions_view.search_query,
            &self.selected_composition_category(),
            ALL_SENTINEL,
        )
    }

    pub fn filtered_datasets(&self) -> Vec<usize> {
        filter_indices(
            &self.datasets.items,
            &self.datasets_view.search_query,
            ALL_SENTINEL,
            ALL_SENTINEL,
        )
    }

    /// Index into the loaded modules for a stage's module reference.
    pub fn module_index_by_key(&self, key: &str) -> Option<usize> {
        self.modules
            .items
            .iter()
            .position(|module| module.key() == key || module.name == key)
    }

    // ---- per-frame upkeep -------------------------------------------

    pub fn tick(&mut self) {
        self.throbber.calc_next();

        if let Some(ready_at) = self.anchor_ready_at {
            if Instant::now() >= ready_at {
                self.anchor_ready_at = None;
                self.try_resolve_anchor();
            }
        }
    }

    pub fn highlight_active(&self) -> bool {
        self.highlight_until.is_some_and(|until| Instant::now() < until)
    }

    // ---- deep-link navigation ---------------------------------------

    /// Looks an anchor up across the loaded collections, by key with name
    /// fallback, modules before compositions before datasets.
    pub fn find_anchor(&self, anchor: &str) -> Option<AnchorHit> {
        if let Some(index) = self
            .modules
            .items
            .iter()
            .position(|module| module.key() == anchor || module.name == anchor)
        {
            return Some(AnchorHit::Module(index));
        }

        if let Some(index) = self
            .compositions
            .items
            .iter()
            .position(|composition| composition.key() == anchor || composition.name == anchor)
        {
            return Some(AnchorHit::Composition(index));
        }

        self.datasets
            .items
            .iter()
            .position(|dataset| dataset.key() == anchor || dataset.name == anchor)
            .map(AnchorHit::Dataset)
    }

    /// Looks the pending anchor up in whichever collections have loaded and
    /// jumps to the match. An anchor nothing matches is dropped silently
    /// once no load could still produce it.
    pub fn try_resolve_anchor(&mut self) {
        let Some(anchor) = self.pending_anchor.clone() else {
            return;
        };

        match self.find_anchor(&anchor) {
            Some(AnchorHit::Module(index)) => {
                self.pending_anchor = None;
                self.jump_to_module(index);
            }
            Some(AnchorHit::Composition(index)) => {
                self.pending_anchor = None;
                self.jump_to_composition(index);
            }
            Some(AnchorHit::Dataset(index)) => {
                self.pending_anchor = None;
                self.screen = AppScreen::Datasets;
                self.datasets_pane = DatasetsPane::Community;
                self.datasets_view.reset_filters();
                let filtered = self.filtered_datasets();
                if let Some(position) = filtered.iter().position(|&i| i == index) {
                    self.datasets_view.selected_index = position;
                }
                self.highlight_until = Some(Instant::now() + HIGHLIGHT_DURATION);
            }
            // Unmatched: wait while a load is still outstanding, then give up.
            None => {
                if !self.any_loading() {
                    self.pending_anchor = None;
                }
            }
        }
    }

    pub fn jump_to_module(&mut self, index: usize) {
        self.screen = AppScreen::Modules;
        self.modules_view.reset_filters();
        let filtered = self.filtered_modules();
        if let Some(position) = filtered.iter().position(|&i| i == index) {
            self.modules_view.selected_index = position;
        }
        self.highlight_until = Some(Instant::now() + HIGHLIGHT_DURATION);
    }

    pub fn jump_to_composition(&mut self, index: usize) {
        self.screen = AppScreen::Compositions;
        self.compositions_view.reset_filters();
        let filtered = self.filtered_compositions();
        if let Some(position) = filtered.iter().position(|&i| i == index) {
            self.compositions_view.selected_index = position;
        }
        self.highlight_until = Some(Instant::now() + HIGHLIGHT_DURATION);
    }

    // ---- submission --------------------------------------------------

    /// Serializes the form into an issue URL, opens it externally and resets
    /// the form. The URL lands in the status line either way.
    pub fn submit_dataset(&mut self) {
        if !self.submit_form.is_submittable() {
            self.status_message = "Dataset name is required.".to_string();
            return;
        }

        let slug = resolve_repo_slug(
            self.actions.config.repo_slug.as_deref(),
            &self.actions.config.base_url,
        );
        let url = build_issue_url(&self.submit_form, slug.as_deref());

        match open_in_browser(&url) {
            Ok(()) => self.status_message = format!("Opened submission issue: {url}"),
            Err(err) => {
                log::warn!("could not spawn URL opener: {err}");
                self.status_message = format!("Open manually: {url}");
            }
        }

        self.submit_form.clear();
        self.submit_field = SubmitField::Name;
    }

    pub fn submit_field_value_mut(&mut self) -> &mut String {
        match self.submit_field {
            SubmitField::Name => &mut self.submit_form.name,
            SubmitField::Description => &mut self.submit_form.description,
            SubmitField::Links => &mut self.submit_form.links,
            SubmitField::Size => &mut self.submit_form.size,
            SubmitField::Tags => &mut self.submit_form.tags,
        }
    }

    pub fn submit_field_value(&self, field: SubmitField) -> &str {
        match field {
            SubmitField::Name => &self.submit_form.name,
            SubmitField::Description => &self.submit_form.description,
            SubmitField::Links => &self.submit_form.links,
            SubmitField::Size => &self.submit_form.size,
            SubmitField::Tags => &self.submit_form.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    fn test_app() -> App {
        App::new(AppActions::new(CatalogConfig {
            base_url: "https://example.org/catalog".to_string(),
            repo_slug: None,
        }))
    }

    #[tokio::test]
    async fn benchmarks_start_from_embedded_defaults() {
        let app = test_app();
        assert!(!app.benchmarks.items.is_empty());
        assert!(app.benchmarks.error.is_none());
    }

    #[tokio::test]
    async fn facets_and_groups_follow_the_loaded_modules() {
        let mut app = test_app();
        app.modules.items = serde_json::from_str(
            r#"[
                {"id": "m1", "name": "RLE", "category": "Encoder", "description": "run length"},
                {"id": "m2", "name": "Lorenzo", "category": "Predictor", "description": ""},
                {"id": "m3", "name": "Huffman", "category": "Encoder", "description": ""}
            ]"#,
        )
        .expect("valid module list");

        assert_eq!(app.module_facets(), vec!["All", "Encoder", "Predictor"]);

        let groups = app.module_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Encoder");
        assert_eq!(groups[0].count(), 2);

        app.modules_view.search_query = "run".to_string();
        assert_eq!(app.filtered_modules(), vec![0]);
    }

    #[tokio::test]
    async fn anchor_resolves_by_id_and_by_name_fallback() {
        let mut app = test_app();
        app.modules.items =
            serde_json::from_str(r#"[{"id": "m1", "name": "RLE", "category": "Encoder"}]"#)
                .expect("valid module list");

        app.pending_anchor = Some("m1".to_string());
        app.try_resolve_anchor();
        assert_eq!(app.screen, AppScreen::Modules);
        assert!(app.pending_anchor.is_none());
        assert!(app.highlight_active());

        app.screen = AppScreen::Main;
        app.pending_anchor = Some("RLE".to_string());
        app.try_resolve_anchor();
        assert_eq!(app.screen, AppScreen::Modules);
    }

    #[tokio::test]
    async fn anchor_lookup_prefers_modules_over_compositions() {
        let mut app = test_app();
        app.modules.items =
            serde_json::from_str(r#"[{"id": "x", "name": "Shared", "category": "Encoder"}]"#)
                .expect("valid module list");
        app.compositions.items =
            serde_json::from_str(r#"[{"id": "x", "name": "Shared", "category": "CPU"}]"#)
                .expect("valid composition list");

        assert_eq!(app.find_anchor("x"), Some(AnchorHit::Module(0)));
        assert_eq!(app.find_anchor("absent"), None);
    }

    #[tokio::test]
    async fn unmatched_anchor_is_dropped_silently_once_loads_settle() {
        let mut app = test_app();
        app.pending_anchor = Some("nope".to_string());
        app.try_resolve_anchor();
        assert!(app.pending_anchor.is_none());
        assert_eq!(app.screen, AppScreen::Main);
        assert!(app.status_message.is_empty());
    }

    #[tokio::test]
    async fn submit_requires_a_name_and_clears_on_success() {
        let mut app = test_app();
        app.submit_dataset();
        assert_eq!(app.status_message, "Dataset name is required.");

        app.submit_form.name = "Foo".to_string();
        app.submit_form.links = "http://x".to_string();
        app.submit_dataset();
        // The opener may or may not exist in the test environment; the form
        // resets and the URL is surfaced either way.
        assert!(app.status_message.contains("github.com"));
        assert!(app.submit_form.name.is_empty());
    }
}
