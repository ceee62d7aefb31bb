use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Hard ceiling on a single candidate attempt. The in-flight request is
/// dropped (and thereby aborted) when the timer wins the race.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(6000);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {}ms", FETCH_TIMEOUT.as_millis())]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not load `{asset}` from any of {attempts} locations")]
    Exhausted { asset: String, attempts: usize },
}

/// Builds the prioritized candidate list for a logical asset name:
/// a base-path-qualified form, a root-absolute form and a relative form,
/// deduplicated, each carrying a cache-defeating query parameter.
pub fn candidate_urls(asset: &str, base_url: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    let forms = [
        format!("{base}/{asset}.json"),
        format!("/{asset}.json"),
        format!("{asset}.json"),
    ];

    let mut candidates: Vec<String> = Vec::with_capacity(forms.len());
    for form in forms {
        if !candidates.contains(&form) {
            candidates.push(form);
        }
    }

    candidates.iter().map(|form| cache_bust(form)).collect()
}

/// Appends a cache-defeating parameter unless the URL already has a query.
fn cache_bust(url: &str) -> String {
    if url.contains('?') {
        url.to_string()
    } else {
        format!("{url}?v={}", chrono::Utc::now().timestamp_millis())
    }
}

/// Scheme plus authority of a URL, without any path component.
fn origin_of(url: &str) -> Option<String> {
    let scheme_end = url.find("://")?;
    let authority_start = scheme_end + 3;
    let authority_end = url[authority_start..]
        .find('/')
        .map_or(url.len(), |offset| authority_start + offset);
    Some(url[..authority_end].to_string())
}

/// A terminal app has no document URL to resolve relative candidates
/// against, so root-absolute forms resolve against the base URL's origin and
/// relative forms against the base URL itself.
fn resolve(candidate: &str, base_url: &str) -> String {
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        return candidate.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if let Some(rest) = candidate.strip_prefix('/') {
        origin_of(base).map_or_else(|| format!("{base}/{rest}"), |origin| format!("{origin}/{rest}"))
    } else {
        format!("{base}/{candidate}")
    }
}

async fn fetch_candidate<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    // One deadline for the whole attempt, headers and body included; the
    // dropped future aborts the in-flight request.
    let attempt = async {
        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    };

    match tokio::time::timeout(FETCH_TIMEOUT, attempt).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout),
    }
}

/// Fetches a logical asset by walking its candidate list in priority order.
/// The first candidate that responds successfully and parses wins; failures
/// along the way are warnings, exhaustion is the only reported error.
pub async fn fetch_asset<T: DeserializeOwned>(
    client: &reqwest::Client,
    asset: &str,
    base_url: &str,
) -> Result<Vec<T>, FetchError> {
    let candidates = candidate_urls(asset, base_url);
    let attempts = candidates.len();

    for candidate in &candidates {
        let url = resolve(candidate, base_url);
        match fetch_candidate::<Vec<T>>(client, &url).await {
            Ok(items) => {
                log::debug!("loaded `{asset}` from {url}");
                return Ok(items);
            }
            Err(err) => log::warn!("candidate {url} for `{asset}` failed: {err}"),
        }
    }

    Err(FetchError::Exhausted {
        asset: asset.to_string(),
        attempts,
    })
}

/// Explicit per-collection load state: the single writer is the completion
/// handler, every derived view is a reader. The generation counter makes a
/// re-triggered load safe: a completion carrying a stale generation is
/// discarded, so the last requested load wins.
#[derive(Debug)]
pub struct LoadState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> LoadState<T> {
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Marks a new load attempt: raises the loading flag, clears any prior
    /// error and returns the generation token the completion must present.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.generation += 1;
        self.generation
    }

    /// Completion for a required asset: failure keeps the prior items and
    /// surfaces the error.
    pub fn finish(&mut self, generation: u64, result: Result<Vec<T>, FetchError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Completion for an optional override: the fetched payload replaces the
    /// current items only when it is a non-empty sequence, and total failure
    /// is silent.
    pub fn finish_override(&mut self, generation: u64, result: Result<Vec<T>, FetchError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        if let Ok(items) = result {
            if !items.is_empty() {
                self.items = items;
            }
        }
    }
}
