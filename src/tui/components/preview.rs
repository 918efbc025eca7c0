//! # Preview Component
//!
//! Detail pane for the selected document, shown beside the list on wide
//! viewports. Mirrors the web client's preview panel: title, category and
//! date, authors, summary, source link.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::search::Document;
use crate::tui::component::Component;

pub struct Preview<'a> {
    pub doc: &'a Document,
}

impl<'a> Component for Preview<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.doc.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} · {}", self.doc.category_label(), self.doc.date_label()),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Authors: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(self.doc.authors_label()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Summary:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.doc.summary_label()),
        ];
        if let Some(url) = &self.doc.source_url {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Full document: {url}"),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }

        let panel = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title("Preview"),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::doc;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_preview_shows_fallbacks_for_sparse_document() {
        let backend = TestBackend::new(50, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let document = doc(1, "Documento escaso");

        terminal
            .draw(|f| {
                let mut preview = Preview { doc: &document };
                let area = f.area();
                preview.render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Documento escaso"));
        assert!(text.contains("Unknown author"));
        assert!(text.contains("Uncategorized"));
        assert!(text.contains("Date unavailable"));
    }
}
