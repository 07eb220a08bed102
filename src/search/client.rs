//! Google Custom Search JSON API client with paginated gathering.

use std::time::Duration;

use thiserror::Error;

use super::types::{CseResponse, SearchResult};

/// Production endpoint for the Custom Search JSON API.
pub const API_BASE: &str = "https://www.googleapis.com/customsearch/v1";

/// The API serves at most this many results per call.
const PAGE_SIZE: usize = 10;

/// Upper bound on any single API call.
const CALL_TIMEOUT: Duration = Duration::from_secs(20);

/// Failures from the search API. None of these are retried; any of them
/// aborts the run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure (connect, timeout, body read, decode).
    #[error("search API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("search API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Custom Search client bound to one API key and engine.
pub struct CseClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    engine_id: String,
}

impl CseClient {
    /// Create a client for the production endpoint.
    pub fn new(api_key: String, engine_id: String) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder().timeout(CALL_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: API_BASE.to_string(),
            api_key,
            engine_id,
        })
    }

    /// Point the client at a different endpoint (used by tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Gather up to `max_total` results for `query`, paging through the API.
    ///
    /// Each call requests `min(10, remaining)` results; the 1-based `start`
    /// offset advances by the number of items the previous call actually
    /// returned. Gathering stops at the cap or at the first empty page.
    pub async fn gather(
        &self,
        query: &str,
        max_total: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut results: Vec<SearchResult> = Vec::new();
        let mut start = 1usize;

        while results.len() < max_total {
            let num = PAGE_SIZE.min(max_total - results.len());
            let items = self.fetch_page(query, num, start).await?;

            if items.is_empty() {
                tracing::debug!(gathered = results.len(), "End of available results");
                break;
            }

            start += items.len();
            let remaining = max_total - results.len();
            results.extend(items.into_iter().take(remaining));
        }

        tracing::info!(count = results.len(), query, "Search complete");
        Ok(results)
    }

    /// Issue one API call for `num` results starting at `start`.
    async fn fetch_page(
        &self,
        query: &str,
        num: usize,
        start: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::debug!(num, start, "Fetching search page");

        let num_param = num.to_string();
        let start_param = start.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", num_param.as_str()),
                ("start", start_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(SearchError::Status { status, body });
        }

        let body: CseResponse = response.json().await?;
        Ok(body.items.into_iter().map(SearchResult::from).collect())
    }
}
