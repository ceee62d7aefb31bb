pub mod embedded;
pub mod fetcher;
pub mod models;

pub use fetcher::{candidate_urls, fetch_asset, FetchError, LoadState, FETCH_TIMEOUT};
pub use models::{
    BenchmarkDataset, Capability, CompositionRecord, DatasetRecord, ModuleRecord, PipelineStage,
    ReferencePaper,
};
