//! # ResultList Component
//!
//! Scrollable list of search results, one bordered card per document.
//!
//! `ResultList` is a transient component (created each frame) that wraps
//! `&mut ResultListState` (persistent scroll/highlight state) and the
//! result slice (props). Card heights are measured each render - a result
//! set is at most one page of documents, so there is nothing worth caching
//! between frames.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::search::{Document, DocumentId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll and highlight state for the result list.
/// Must be persisted in the parent TuiState.
pub struct ResultListState {
    pub scroll_state: ScrollViewState,
    /// Index the keyboard highlight sits on (distinct from the selection,
    /// which lives in core state).
    pub highlighted: Option<usize>,
    /// Per-card heights measured during the last render.
    pub heights: Vec<u16>,
    /// Cumulative heights, for hit testing and scroll-to-highlight.
    pub prefix_heights: Vec<u16>,
    /// Last known viewport height.
    pub viewport_height: u16,
}

impl ResultListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            highlighted: None,
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Reset scroll and highlight, keeping nothing from the previous
    /// result set.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
    }

    /// Which card contains the given content-space y coordinate.
    pub fn hit_test(&self, content_y: u16) -> Option<usize> {
        let idx = self.prefix_heights.partition_point(|&end| end <= content_y);
        (idx < self.prefix_heights.len()).then_some(idx)
    }

    /// Move the keyboard highlight; `len` is the current result count.
    pub fn move_highlight(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match (self.highlighted, delta) {
            (None, d) if d < 0 => len - 1,
            (None, _) => 0,
            (Some(i), d) if d < 0 => i.saturating_sub(1),
            (Some(i), _) => (i + 1).min(len - 1),
        });
        self.scroll_to_highlighted();
    }

    /// Scroll the viewport so the highlighted card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_highlighted(&mut self) {
        let Some(idx) = self.highlighted else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }

        let item_top = if idx == 0 {
            0
        } else {
            self.prefix_heights[idx - 1]
        };
        let item_bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let total: u16 = self.heights.iter().sum();
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl Default for ResultListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ResultListState {
    type Event = (); // Scrolling is handled internally, no events emitted

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

/// Build the card paragraph for one document.
fn document_card<'a>(doc: &'a Document, is_selected: bool, is_highlighted: bool) -> Paragraph<'a> {
    let mut lines = vec![
        Line::from(Span::styled(
            doc.category_label(),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            doc.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", doc.authors_label(), doc.date_label()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(doc.summary_label()),
    ];
    if let Some(url) = &doc.source_url {
        lines.push(Line::from(Span::styled(
            url.as_str(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if is_highlighted {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let style = if is_highlighted {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
        .style(style)
        .wrap(Wrap { trim: true })
}

/// Scrollable result list component.
/// Created fresh each frame with references to state and data.
pub struct ResultList<'a> {
    pub state: &'a mut ResultListState,
    pub results: &'a [Document],
    /// Id of the currently selected document, if any.
    pub selected_id: Option<&'a DocumentId>,
}

impl<'a> Component for ResultList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let inner_width = content_width.saturating_sub(2);

        // Measure cards
        let cards: Vec<Paragraph> = self
            .results
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                let is_selected = self.selected_id.is_some_and(|id| *id == doc.id);
                let is_highlighted = self.state.highlighted == Some(i);
                document_card(doc, is_selected, is_highlighted)
            })
            .collect();

        self.state.heights = cards
            .iter()
            .map(|card| card.line_count(inner_width) as u16)
            .collect();
        self.state.rebuild_prefix_heights();
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let total_height: u16 = self.state.heights.iter().sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (card, &height) in cards.into_iter().zip(self.state.heights.iter()) {
            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(card, card_rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
