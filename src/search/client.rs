//! HTTP client for the ClinicCloud search endpoint.
//!
//! One outbound `POST /api/search/` per invocation; no retries, no
//! caching. Any non-2xx status is treated uniformly as a service failure —
//! the caller never branches on the specific status code.

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::types::Document;

/// The client only ever fetches the first page.
pub const SEARCH_LIMIT: u32 = 20;
pub const SEARCH_OFFSET: u32 = 0;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors from one search exchange.
#[derive(Debug)]
pub enum SearchError {
    /// Transport failure (offline, DNS, timeout, connection refused).
    Network(String),
    /// Endpoint reachable but responded with a non-success status.
    Service { status: u16, message: String },
    /// 2xx response whose body was not the expected shape.
    Parse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::Service { status, message } => {
                write!(f, "service error (HTTP {status}): {message}")
            }
            SearchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Serialize, Debug)]
struct SearchRequest<'a> {
    query: &'a str,
    limit: u32,
    offset: u32,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    results: Vec<Document>,
}

/// Anything that can answer a search query. The TUI depends on this trait
/// so tests can substitute a stub backend.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Returns the service-ranked document list for `query`.
    async fn search(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Document>, SearchError>;
}

/// reqwest-backed client against a ClinicCloud API instance.
pub struct HttpSearchClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Document>, SearchError> {
        let request = SearchRequest {
            query,
            limit,
            offset,
        };
        debug!(
            "Search request: query={:?}, limit={}, offset={}",
            query, limit, offset
        );

        let response = self
            .client
            .post(format!("{}/api/search/", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Search response status: {status}");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Search service error: {} - {}", status.as_u16(), message);
            return Err(SearchError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        debug!("Search returned {} documents", body.results.len());
        Ok(body.results)
    }
}
