//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the two
//! screens, and translates keyboard and mouse events into `core::Action`
//! values. This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Search spawning
//!
//! `update()` never performs I/O. When it returns `Effect::SpawnSearch`,
//! the loop spawns a tokio task that calls the backend once and sends an
//! `Action::SearchCompleted` back over an mpsc channel, drained at the
//! bottom of each loop iteration. Stale-response filtering happens inside
//! `update()`, keyed by the request sequence number.

mod component;
pub mod components;
mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::search::{HttpSearchClient, SEARCH_LIMIT, SEARCH_OFFSET, SearchBackend};
use crate::tui::component::EventHandler;
use crate::tui::components::{ResultListState, SearchBox, SearchBoxEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode on the results screen: determines how keyboard events
/// are interpreted. The entry screen is always in Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the search box. Esc switches to Browse.
    Input,
    /// Navigate results with arrow keys; Enter toggles the selection.
    /// Typing auto-switches to Input; Esc goes back to the entry screen.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub result_list: ResultListState,
    pub input_mode: InputMode,
    /// Screen rect the result list occupied on the last draw, for mouse
    /// hit testing. `None` whenever the list is not on screen.
    pub results_list_area: Option<Rect>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            result_list: ResultListState::new(),
            input_mode: InputMode::Input, // User expects to type immediately
            results_list_area: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn SearchBackend> =
        Arc::new(HttpSearchClient::new(config.base_url.clone()));
    let mut app = App::new(backend);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background search tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync SearchBox props with TUI state
        tui.search_box.focused = tui.input_mode == InputMode::Input;

        let animating = app.query.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll timeout while the spinner runs, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Mouse click on a result card toggles its selection
            if let TuiEvent::MouseClick(col, row) = event {
                if let Some(idx) = hit_test_result(&tui, col, row) {
                    if let Some(doc) = app.query.results.get(idx).cloned() {
                        tui.result_list.highlighted = Some(idx);
                        update(&mut app, Action::ToggleSelect(doc));
                    }
                }
                continue;
            }

            // Scroll events always go to the result list
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.result_list.handle_event(&event);
                continue;
            }

            match app.screen {
                Screen::Entry => {
                    // The entry screen is a single search box
                    if let Some(SearchBoxEvent::Submit(text)) =
                        tui.search_box.handle_event(&event)
                    {
                        let effect = update(&mut app, Action::SubmitQuery(text));
                        if let Effect::SpawnSearch { query, seq } = effect {
                            spawn_search(&app, query, seq, tx.clone());
                            tui.input_mode = InputMode::Browse;
                        }
                    }
                }
                Screen::Results => match tui.input_mode {
                    InputMode::Input => {
                        // Esc hands the keyboard to the result list
                        if matches!(event, TuiEvent::Escape) {
                            tui.input_mode = InputMode::Browse;
                            continue;
                        }
                        if let Some(SearchBoxEvent::Submit(text)) =
                            tui.search_box.handle_event(&event)
                        {
                            // No navigation needed - already on this screen
                            let effect = update(&mut app, Action::SubmitQuery(text));
                            if let Effect::SpawnSearch { query, seq } = effect {
                                spawn_search(&app, query, seq, tx.clone());
                                tui.input_mode = InputMode::Browse;
                            }
                        }
                    }
                    InputMode::Browse => match event {
                        TuiEvent::Escape => {
                            update(&mut app, Action::NavigateEntry);
                            tui.input_mode = InputMode::Input;
                        }
                        TuiEvent::CursorUp => {
                            tui.result_list.move_highlight(-1, app.query.results.len());
                        }
                        TuiEvent::CursorDown => {
                            tui.result_list.move_highlight(1, app.query.results.len());
                        }
                        TuiEvent::Submit => {
                            if let Some(doc) = tui
                                .result_list
                                .highlighted
                                .and_then(|idx| app.query.results.get(idx).cloned())
                            {
                                update(&mut app, Action::ToggleSelect(doc));
                            }
                        }
                        // Typing auto-switches to Input mode and forwards the event
                        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                            tui.input_mode = InputMode::Input;
                            tui.search_box.handle_event(&event);
                        }
                        _ => {}
                    },
                },
            }
        }

        if should_quit {
            break;
        }

        // Handle completed background searches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let fresh_results = matches!(
                &action,
                Action::SearchCompleted { seq, .. } if *seq == app.query.latest_seq
            );
            update(&mut app, action);
            if fresh_results {
                // Presentation state must not outlive the result set
                tui.result_list.reset();
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Map a screen coordinate to a result index, if it lands on a card.
fn hit_test_result(tui: &TuiState, col: u16, row: u16) -> Option<usize> {
    let list_area = tui.results_list_area?;
    if !list_area.contains(Position { x: col, y: row }) {
        return None;
    }
    let content_y = (row - list_area.y) + tui.result_list.scroll_state.offset().y;
    tui.result_list.hit_test(content_y)
}

fn spawn_search(app: &App, query: String, seq: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning search #{seq}");
    let backend = app.backend.clone();

    tokio::spawn(async move {
        let outcome = backend.search(&query, SEARCH_LIMIT, SEARCH_OFFSET).await;
        if tx.send(Action::SearchCompleted { seq, outcome }).is_err() {
            warn!("Failed to send search #{seq} result: receiver dropped");
        }
    });
}
