//! # SearchBox Component
//!
//! Single-line query input used by both screens. The entry screen shows it
//! centered under the title; the results screen keeps a persistent copy
//! under the header so the user can refine the query in place.
//!
//! The buffer is internal state and survives submission - the submitted
//! text stays visible, matching the persistent search field on the results
//! screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBoxEvent {
    /// User submitted a non-blank query (Enter pressed)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

pub struct SearchBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Whether this box currently owns the cursor (prop)
    pub focused: bool,
    /// Cursor position as a byte offset into `buffer`
    cursor: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: 0,
        }
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;

        // Slide the visible window right until the cursor fits.
        let mut start = 0;
        while self.buffer[start..self.cursor].width() >= inner_width && start < self.cursor {
            start = next_char_boundary(&self.buffer, start);
        }
        let visible = &self.buffer[start..];

        let style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title("Search");
        let placeholder = self.buffer.is_empty() && !self.focused;
        let text = if placeholder {
            "Search clinical documentation..."
        } else {
            visible
        };
        let input = Paragraph::new(text).block(block).style(style);
        frame.render_widget(input, area);

        if self.focused {
            let cursor_x = area.x + 1 + self.buffer[start..self.cursor].width() as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchBoxEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: drop control characters from pastes
                let clean: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &clean);
                self.cursor += clean.len();
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchBoxEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(SearchBoxEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(SearchBoxEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(SearchBoxEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                (self.cursor != 0).then(|| {
                    self.cursor = 0;
                    SearchBoxEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                (self.cursor != self.buffer.len()).then(|| {
                    self.cursor = self.buffer.len();
                    SearchBoxEvent::ContentChanged
                })
            }
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    None
                } else {
                    Some(SearchBoxEvent::Submit(self.buffer.clone()))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_editing() {
        let mut input = SearchBox::new();

        input.handle_event(&TuiEvent::InputChar('a'));
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "a");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "");
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = SearchBox::new();
        input.buffer = "migraña".to_string();
        input.cursor = input.buffer.len();

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(SearchBoxEvent::Submit("migraña".to_string())));
        assert_eq!(input.buffer, "migraña", "query stays visible after submit");
    }

    #[test]
    fn test_blank_submit_emits_nothing() {
        let mut input = SearchBox::new();
        input.buffer = "   ".to_string();
        input.cursor = 3;
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = SearchBox::new();
        input.handle_event(&TuiEvent::Paste("head\nache".to_string()));
        assert_eq!(input.buffer, "headache");
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = SearchBox::new();
        input.handle_event(&TuiEvent::InputChar('ñ'));
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace); // at start, no-op
        assert_eq!(input.buffer, "ñ");
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "");
    }

    #[test]
    fn test_render_with_cursor() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = SearchBox::new();
        input.handle_event(&TuiEvent::InputChar('x'));

        terminal
            .draw(|f| {
                let area = f.area();
                input.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Search"));
        assert!(text.contains('x'));
    }
}
