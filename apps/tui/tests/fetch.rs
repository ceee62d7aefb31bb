use compress_catalog_tui::assets::embedded::sdrbench_defaults;
use compress_catalog_tui::assets::fetcher::{fetch_asset, FetchError, LoadState, FETCH_TIMEOUT};
use compress_catalog_tui::assets::models::{BenchmarkDataset, ModuleRecord};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn module_payload() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "m1",
            "name": "RLE",
            "category": "Encoder",
            "description": "run length",
            "tags": ["lossless"],
            "features": ["fast"]
        }
    ])
}

#[tokio::test]
async fn first_successful_candidate_wins_and_stops_the_chain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog/modules.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(module_payload()))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let base_url = format!("{}/catalog", server.uri());
    let modules: Vec<ModuleRecord> = fetch_asset(&client, "modules", &base_url)
        .await
        .expect("first candidate should succeed");

    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].key(), "m1");

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1, "no further candidates should be tried");
}

#[tokio::test]
async fn failed_candidate_falls_back_to_the_root_absolute_form() {
    let server = MockServer::start().await;
    // Nothing mounted on /catalog/modules.json: the base-qualified candidate
    // 404s and the root-absolute one serves the asset.
    Mock::given(method("GET"))
        .and(path("/modules.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(module_payload()))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let base_url = format!("{}/catalog", server.uri());
    let modules: Vec<ModuleRecord> = fetch_asset(&client, "modules", &base_url)
        .await
        .expect("fallback candidate should succeed");

    assert_eq!(modules[0].name, "RLE");
}

#[tokio::test]
async fn malformed_payload_is_a_candidate_failure_not_a_fatal_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog/modules.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/modules.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(module_payload()))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let base_url = format!("{}/catalog", server.uri());
    let modules: Vec<ModuleRecord> = fetch_asset(&client, "modules", &base_url)
        .await
        .expect("parse failure should advance to the next candidate");

    assert_eq!(modules[0].name, "RLE");
}

#[tokio::test]
async fn slow_candidate_is_cut_off_at_the_deadline_and_the_chain_advances() {
    let server = MockServer::start().await;
    // The base-qualified candidate answers, headers and body included, only
    // after the deadline has passed; the root-absolute one is instant. The
    // deadline covers the whole attempt, not each phase separately.
    let beyond_deadline = FETCH_TIMEOUT + Duration::from_secs(1);
    Mock::given(method("GET"))
        .and(path("/catalog/modules.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(module_payload())
                .set_delay(beyond_deadline),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/modules.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(module_payload()))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let base_url = format!("{}/catalog", server.uri());
    let started = Instant::now();
    let modules: Vec<ModuleRecord> = fetch_asset(&client, "modules", &base_url)
        .await
        .expect("fallback candidate should succeed after the timeout");
    let elapsed = started.elapsed();

    assert_eq!(modules[0].name, "RLE");
    assert!(
        elapsed >= FETCH_TIMEOUT,
        "first candidate must be given the full deadline"
    );
    assert!(
        elapsed < beyond_deadline,
        "attempt took {elapsed:?}; the slow candidate was not cut off at the deadline"
    );
}

#[tokio::test]
async fn exhaustion_reports_one_error_and_leaves_the_collection_unchanged() {
    let server = MockServer::start().await;
    // No mocks: every candidate 404s.

    let client = reqwest::Client::new();
    let base_url = format!("{}/catalog", server.uri());
    let result: Result<Vec<ModuleRecord>, FetchError> =
        fetch_asset(&client, "modules", &base_url).await;

    let Err(FetchError::Exhausted { asset, attempts }) = result else {
        panic!("expected exhaustion");
    };
    assert_eq!(asset, "modules");
    assert_eq!(attempts, 3);

    let mut state: LoadState<ModuleRecord> = LoadState::default();
    let generation = state.begin();
    state.finish(
        generation,
        Err(FetchError::Exhausted { asset, attempts }),
    );
    assert!(state.items.is_empty());
    assert!(state.error.is_some());
    assert!(!state.loading);
}

#[tokio::test]
async fn benchmark_override_failure_keeps_the_embedded_defaults_silently() {
    let server = MockServer::start().await;
    // The sdrbench-datasets asset is entirely unreachable.

    let client = reqwest::Client::new();
    let base_url = format!("{}/catalog", server.uri());

    let mut state = LoadState::with_items(sdrbench_defaults());
    let expected_len = state.items.len();
    let generation = state.begin();
    let result: Result<Vec<BenchmarkDataset>, FetchError> =
        fetch_asset(&client, "sdrbench-datasets", &base_url).await;
    state.finish_override(generation, result);

    assert_eq!(state.items.len(), expected_len);
    assert!(state.error.is_none(), "override failure must not surface an error");
    assert!(!state.loading);
}

#[tokio::test]
async fn non_empty_override_replaces_the_embedded_defaults_wholesale() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog/sdrbench-datasets.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "NYX", "type": "Cosmology", "format": "f32", "size": "3.1 GB"}
        ])))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let base_url = format!("{}/catalog", server.uri());

    let mut state = LoadState::with_items(sdrbench_defaults());
    let generation = state.begin();
    let result = fetch_asset::<BenchmarkDataset>(&client, "sdrbench-datasets", &base_url).await;
    state.finish_override(generation, result);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "NYX");
}
