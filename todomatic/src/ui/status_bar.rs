//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        PanelFocus::Input => "Enter: add/save | Tab: switch panel | Esc: quit",
        PanelFocus::TaskList => {
            "Space: toggle | e: edit | d: delete | r: refresh | \u{2191}\u{2193}/jk: navigate | Esc: quit"
        }
        PanelFocus::Filters => {
            "\u{2190}\u{2192}/hl: filter | \u{2191}\u{2193}/jk: user | r: refresh | Esc: quit"
        }
    };

    let mut spans = vec![
        Span::styled("TodoMatic v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled("\u{25cf}", theme::normal().fg(theme::SUCCESS)),
        Span::raw(format!(" {} tasks, {} users", app.store.len(), app.users.len())),
        Span::raw(" | "),
    ];

    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            notice.clone(),
            theme::normal().fg(theme::WARNING),
        ));
    } else {
        spans.push(Span::styled(help_text, theme::dimmed()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
