//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::search::{Document, DocumentId, SearchBackend, SearchError};

/// A backend that returns a canned response without touching the network.
pub struct StubSearchBackend {
    pub results: Vec<Document>,
}

#[async_trait]
impl SearchBackend for StubSearchBackend {
    async fn search(
        &self,
        _query: &str,
        _limit: u32,
        _offset: u32,
    ) -> Result<Vec<Document>, SearchError> {
        Ok(self.results.clone())
    }
}

/// Creates a test App backed by an empty stub.
pub fn test_app() -> App {
    App::new(Arc::new(StubSearchBackend { results: vec![] }))
}

/// Minimal document with the given id and title; everything else absent.
pub fn doc(id: i64, title: &str) -> Document {
    Document {
        id: DocumentId::Int(id),
        title: title.to_string(),
        summary: None,
        source_url: None,
        publication_date: None,
        authors: Vec::new(),
        category: None,
    }
}
