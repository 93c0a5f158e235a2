//! Filter bar rendering: the three filters plus the user selector.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use todomatic_api::filter::Filter;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the filter buttons and the user selector on one line.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Filters;

    let mut spans = Vec::new();
    for filter in Filter::ALL {
        let style = if filter == app.filter {
            theme::selected()
        } else {
            theme::normal()
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled("\u{2502} ", theme::dimmed()));
    let user_style = if app.selected_user.is_some() {
        theme::normal().fg(theme::user_color(app.user_label()))
    } else {
        theme::dimmed()
    };
    spans.push(Span::styled("\u{25be} ", theme::dimmed()));
    spans.push(Span::styled(app.user_label().to_string(), user_style));

    let block = Block::default()
        .title("Filters")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
