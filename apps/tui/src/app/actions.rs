use crate::assets::fetcher::{fetch_asset, FetchError};
use crate::assets::models::{BenchmarkDataset, CompositionRecord, DatasetRecord, ModuleRecord};
use crate::config::CatalogConfig;
use tokio::sync::mpsc;

/// Completion of one spawned asset load. The generation token ties it back
/// to the `LoadState` that requested it; stale completions are discarded by
/// the receiver.
#[derive(Debug)]
pub struct LoadEvent {
    pub generation: u64,
    pub outcome: LoadOutcome,
}

#[derive(Debug)]
pub enum LoadOutcome {
    Modules(Result<Vec<ModuleRecord>, FetchError>),
    Compositions(Result<Vec<CompositionRecord>, FetchError>),
    Datasets(Result<Vec<DatasetRecord>, FetchError>),
    Benchmarks(Result<Vec<BenchmarkDataset>, FetchError>),
}

/// Owns the HTTP client and the completion channel. Loads run as detached
/// tasks; the event loop drains completions between frames.
#[derive(Debug)]
pub struct AppActions {
    client: reqwest::Client,
    pub config: CatalogConfig,
    tx: mpsc::UnboundedSender<LoadEvent>,
    rx: mpsc::UnboundedReceiver<LoadEvent>,
}

impl AppActions {
    pub fn new(config: CatalogConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client: reqwest::Client::new(),
            config,
            tx,
            rx,
        }
    }

    pub fn spawn_load_modules(&self, generation: u64) {
        let client = self.client.clone();
        let base_url = self.config.base_url.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch_asset::<ModuleRecord>(&client, "modules", &base_url).await;
            let _ = tx.send(LoadEvent {
                generation,
                outcome: LoadOutcome::Modules(result),
            });
        });
    }

    pub fn spawn_load_compositions(&self, generation: u64) {
        let client = self.client.clone();
        let base_url = self.config.base_url.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch_asset::<CompositionRecord>(&client, "compositions", &base_url).await;
            let _ = tx.send(LoadEvent {
                generation,
                outcome: LoadOutcome::Compositions(result),
            });
        });
    }

    pub fn spawn_load_datasets(&self, generation: u64) {
        let client = self.client.clone();
        let base_url = self.config.base_url.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch_asset::<DatasetRecord>(&client, "datasets", &base_url).await;
            let _ = tx.send(LoadEvent {
                generation,
                outcome: LoadOutcome::Datasets(result),
            });
        });
    }

    pub fn spawn_load_benchmarks(&self, generation: u64) {
        let client = self.client.clone();
        let base_url = self.config.base_url.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result =
                fetch_asset::<BenchmarkDataset>(&client, "sdrbench-datasets", &base_url).await;
            let _ = tx.send(LoadEvent {
                generation,
                outcome: LoadOutcome::Benchmarks(result),
            });
        });
    }

    /// Non-blocking drain of pending completions.
    pub fn drain_events(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    // Direct fetches for the headless path, which has no event loop.

    pub async fn fetch_modules(&self) -> Result<Vec<ModuleRecord>, FetchError> {
        fetch_asset(&self.client, "modules", &self.config.base_url).await
    }

    pub async fn fetch_compositions(&self) -> Result<Vec<CompositionRecord>, FetchError> {
        fetch_asset(&self.client, "compositions", &self.config.base_url).await
    }

    pub async fn fetch_datasets(&self) -> Result<Vec<DatasetRecord>, FetchError> {
        fetch_asset(&self.client, "datasets", &self.config.base_url).await
    }

    pub async fn fetch_benchmarks(&self) -> Result<Vec<BenchmarkDataset>, FetchError> {
        fetch_asset(&self.client, "sdrbench-datasets", &self.config.base_url).await
    }
}
