//! # TUI Components
//!
//! Components follow two patterns, as in the rest of the tui module:
//!
//! - **Stateless (props-based)**: `EntryHeader`, `EntryTagline`, `Preview` —
//!   receive all data as fields, render, done.
//! - **Stateful (event-driven)**: `SearchBox` and `ResultList` — persistent
//!   state (`SearchBox` itself, `ResultListState`) lives in `TuiState`,
//!   events arrive via `EventHandler`, high-level events bubble up to the
//!   event loop.
//!
//! Each component file co-locates its state types, event types, rendering,
//! event handling, and tests.

pub mod entry;
pub mod preview;
pub mod result_list;
pub mod search_box;

pub use entry::{EntryHeader, EntryTagline};
pub use preview::Preview;
pub use result_list::{ResultList, ResultListState};
pub use search_box::{SearchBox, SearchBoxEvent};
