//! # Core Application Logic
//!
//! This module contains the client's business logic. It knows nothing
//! about any specific UI technology.
//!
//! - [`state`]: `App` — query, results, selection, and current screen
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`layout`]: the pure result-layout policy
//! - [`config`]: base-URL resolution (defaults → file → env → CLI)
//!
//! No I/O happens here. Network work is requested via `Effect` values
//! returned from `update()` and executed by the TUI adapter.

pub mod action;
pub mod config;
pub mod layout;
pub mod state;
