//! Header rendering: app title and the remaining-count heading.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::App;

/// Render the title line and the pluralized visible-count heading.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled("TodoMatic", theme::bold())),
        Line::from(Span::styled(app.heading(), theme::dimmed())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
