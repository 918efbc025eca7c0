//! # Actions
//!
//! Everything that can happen in the client becomes an `Action`.
//! User submits a query? That's `Action::SubmitQuery`.
//! The service responds? That's `Action::SearchCompleted`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No I/O here - when an action requires work the core
//! cannot do itself (spawning the network call), `update()` returns an
//! `Effect` and the TUI layer executes it.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Search failures are swallowed at this boundary: they are logged and
//! collapsed into an empty result set, so the user sees the same
//! "no results" screen as a legitimate zero-hit query.

use log::{debug, error, info};

use crate::core::state::{App, Screen};
use crate::search::{Document, SearchError};

#[derive(Debug)]
pub enum Action {
    /// User pressed Enter in a search box. Carries the raw (untrimmed) text.
    SubmitQuery(String),
    /// A spawned search task finished. `seq` identifies which submit it
    /// belongs to; anything but the latest is discarded.
    SearchCompleted {
        seq: u64,
        outcome: Result<Vec<Document>, SearchError>,
    },
    /// User activated a result item (click or Enter on the highlight).
    ToggleSelect(Document),
    /// Back to the entry screen. Results and selection are kept.
    NavigateEntry,
    Quit,
}

/// Side work `update()` asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue exactly one `SearchBackend::search` call for this query.
    SpawnSearch { query: String, seq: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitQuery(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                // Whitespace-only submit: no call, no state change.
                debug!("Ignoring empty query submit");
                return Effect::None;
            }

            app.query.latest_seq += 1;
            app.query.query = trimmed.to_string();
            app.query.is_loading = true;
            // Navigate before the response resolves; the results screen
            // renders its own loading indicator.
            app.screen = Screen::Results;

            info!("Submitting search #{}: {:?}", app.query.latest_seq, trimmed);
            Effect::SpawnSearch {
                query: trimmed.to_string(),
                seq: app.query.latest_seq,
            }
        }

        Action::SearchCompleted { seq, outcome } => {
            if seq != app.query.latest_seq {
                // A newer submit superseded this request; applying it would
                // leave the screen showing results for the wrong query.
                debug!(
                    "Discarding stale search response #{} (latest is #{})",
                    seq, app.query.latest_seq
                );
                return Effect::None;
            }

            app.query.is_loading = false;
            app.query.has_searched = true;
            match outcome {
                Ok(results) => {
                    info!("Search #{} returned {} documents", seq, results.len());
                    app.query.results = results;
                    // A fresh result set invalidates any previous selection.
                    app.selection.clear();
                }
                Err(e) => {
                    // Swallowed: the user sees the generic no-results state.
                    error!("Search #{} failed: {}", seq, e);
                    app.query.results = Vec::new();
                }
            }
            Effect::None
        }

        Action::ToggleSelect(doc) => {
            app.selection.toggle(doc);
            Effect::None
        }

        Action::NavigateEntry => {
            app.screen = Screen::Entry;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
