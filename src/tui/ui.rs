//! Screen composition: draws the entry screen or the results screen from
//! the current `App` and `TuiState`.
//!
//! The results screen applies the pure layout policy from `core::layout`.
//! The policy speaks "layout units" (the web client's pixel breakpoints);
//! here one terminal cell counts as [`UNITS_PER_CELL`] units, which puts
//! the two-pane breakpoint at 124 columns.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::layout::{Columns, LIST_RATIO, PREVIEW_RATIO, results_layout};
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EntryHeader, EntryTagline, Preview, ResultList};

/// How many layout units one terminal cell is worth.
pub const UNITS_PER_CELL: u16 = 8;

/// Widest the search box gets on the entry screen.
const ENTRY_BOX_WIDTH: u16 = 64;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    // The list rect is only valid while the results list is on screen
    tui.results_list_area = None;

    match app.screen {
        Screen::Entry => draw_entry_screen(frame, tui),
        Screen::Results => draw_results_screen(frame, app, tui, spinner_frame),
    }
}

fn draw_entry_screen(frame: &mut Frame, tui: &mut TuiState) {
    use Constraint::Length;

    let [header_area, _, box_area, _, tagline_area] = Layout::vertical([
        Length(2),
        Length(1),
        Length(3),
        Length(1),
        Length(2),
    ])
    .flex(Flex::Center)
    .areas(frame.area());

    EntryHeader.render(frame, header_area);

    let box_width = ENTRY_BOX_WIDTH.min(frame.area().width.saturating_sub(4));
    let [centered_box] = Layout::horizontal([Length(box_width)])
        .flex(Flex::Center)
        .areas(box_area);
    tui.search_box.render(frame, centered_box);

    EntryTagline.render(frame, tagline_area);
}

fn draw_results_screen(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let [title_area, box_area, content_area] =
        Layout::vertical([Length(1), Length(3), Min(0)]).areas(frame.area());

    let title = format!("ClinicCloud — results for \"{}\"", app.query.query);
    frame.render_widget(
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );

    tui.search_box.render(frame, box_area);

    if app.query.is_loading {
        draw_loading(frame, content_area, spinner_frame);
    } else if app.query.results.is_empty() {
        // Zero hits and swallowed search failures render identically.
        draw_no_results(frame, content_area);
    } else {
        draw_result_layout(frame, content_area, app, tui);
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(Span::styled(
            spinner,
            Style::default().fg(Color::Cyan),
        )),
        Line::from("Searching documents..."),
    ];
    let [centered] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn draw_no_results(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("No results found for your search."),
        Line::from(Span::styled(
            "Try different terms or check your spelling.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let [centered] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn draw_result_layout(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let width_units = area.width.saturating_mul(UNITS_PER_CELL);
    let layout = results_layout(width_units, app.selection.selected.is_some());

    let (list_area, preview_area) = match layout.columns {
        Columns::Two => {
            let [list, preview] = Layout::horizontal([
                Constraint::Fill(LIST_RATIO as u16),
                Constraint::Fill(PREVIEW_RATIO as u16),
            ])
            .areas(area);
            (list, Some(preview))
        }
        Columns::One => match layout.list_max_width {
            Some(max_units) => {
                let cap_cells = (max_units / UNITS_PER_CELL).min(area.width);
                let [list] = Layout::horizontal([Constraint::Length(cap_cells)])
                    .flex(Flex::Center)
                    .areas(area);
                (list, None)
            }
            None => (area, None),
        },
    };

    let selected_id = app.selection.selected.as_ref().map(|doc| &doc.id);
    let mut list = ResultList {
        state: &mut tui.result_list,
        results: &app.query.results,
        selected_id,
    };
    list.render(frame, list_area);
    tui.results_list_area = Some(list_area);

    if let (Some(preview_area), Some(doc)) = (preview_area, app.selection.selected.as_ref()) {
        Preview { doc }.render(frame, preview_area);
    }
}
