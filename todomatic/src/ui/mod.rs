//! Terminal UI rendering.

pub mod filter_bar;
pub mod header;
pub mod input_box;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Phase};

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    match &app.phase {
        Phase::Loading => draw_loading(frame),
        Phase::Failed(message) => draw_failed(frame, message),
        Phase::Ready => draw_ready(frame, app),
    }
}

/// Full-screen loading state shown while the initial fetch is in flight.
fn draw_loading(frame: &mut Frame) {
    let area = centered_line(frame.area());
    let line = Line::from(vec![
        Span::styled("Loading", theme::bold()),
        Span::styled(" tasks and users\u{2026}", theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line).centered(), area);
}

/// Full-screen error state with the fetch failure message.
fn draw_failed(frame: &mut Frame, message: &str) {
    let area = centered_line(frame.area());
    let lines = vec![
        Line::from(Span::styled(format!("Error: {message}"), theme::error())),
        Line::from(Span::styled("r: retry | q: quit", theme::dimmed())),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

/// The interactive layout: header, filter bar, task list, input, status.
fn draw_ready(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Filter bar
            Constraint::Min(3),    // Task list
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    filter_bar::render(frame, chunks[1], app);
    task_list::render(frame, chunks[2], app);
    input_box::render(frame, chunks[3], app);
    status_bar::render(frame, chunks[4], app);
}

/// A small vertically centered band for the loading/error screens.
fn centered_line(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(2),
            Constraint::Percentage(45),
        ])
        .split(area);
    chunks[1]
}
