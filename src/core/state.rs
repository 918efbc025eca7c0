//! # Application State
//!
//! Core business state for the search client. This module contains domain
//! logic only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn SearchBackend>   // search service
//! ├── screen: Screen                    // Entry | Results
//! ├── query: QueryState                 // query text + result set + loading flag
//! └── selection: SelectionState         // at most one selected document
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Both screens read the same `App` instance; neither mutates it directly.

use std::sync::Arc;

use crate::search::{Document, SearchBackend};

/// Which of the two screens is showing. The terminal analogue of the
/// web client's `/` and `/results` routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Entry,
    Results,
}

/// The query lifecycle: text, current result set, and the in-flight flag.
pub struct QueryState {
    /// Last submitted query (trimmed). Empty only before the first submit.
    pub query: String,
    /// Server-provided rank order is preserved as insertion order.
    pub results: Vec<Document>,
    pub is_loading: bool,
    /// Distinguishes "zero results" from "never searched".
    pub has_searched: bool,
    /// Sequence number of the most recently issued search. Responses
    /// carrying any other number are stale and get discarded.
    pub latest_seq: u64,
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            is_loading: false,
            has_searched: false,
            latest_seq: 0,
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

/// At most one document selected for detail preview.
#[derive(Default)]
pub struct SelectionState {
    pub selected: Option<Document>,
}

impl SelectionState {
    /// Toggle semantics: selecting the already-selected document (by `id`)
    /// deselects it; anything else replaces the selection.
    pub fn toggle(&mut self, doc: Document) {
        match &self.selected {
            Some(current) if current.id == doc.id => self.selected = None,
            _ => self.selected = Some(doc),
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, doc: &Document) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|current| current.id == doc.id)
    }
}

pub struct App {
    pub backend: Arc<dyn SearchBackend>,
    pub screen: Screen,
    pub query: QueryState,
    pub selection: SelectionState,
}

impl App {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            screen: Screen::Entry,
            query: QueryState::new(),
            selection: SelectionState::default(),
        }
    }
}
