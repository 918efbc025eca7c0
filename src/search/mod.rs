//! Search service integration: wire types and the HTTP client.

mod client;
mod types;

pub use client::{
    DEFAULT_BASE_URL, HttpSearchClient, SEARCH_LIMIT, SEARCH_OFFSET, SearchBackend, SearchError,
};
pub use types::{Category, Document, DocumentId};
