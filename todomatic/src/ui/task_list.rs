//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the visible tasks: checkbox, title, and owner username.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::TaskList;

    let items: Vec<ListItem> = app
        .visible()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let is_selected = idx == app.selected_task;

            let checkbox = if row.task.completed {
                "[\u{2713}]"
            } else {
                "[ ]"
            };
            let title_style = if row.task.completed {
                theme::dimmed()
            } else {
                theme::normal()
            };

            let line = Line::from(vec![
                Span::styled(checkbox, title_style),
                Span::raw(" "),
                Span::styled(row.task.title.clone(), title_style),
                Span::raw("  "),
                Span::styled(
                    format!("@{}", row.username),
                    theme::dimmed().fg(theme::user_color(row.username)),
                ),
            ]);

            let style = if is_selected && is_focused {
                theme::selected()
            } else if is_selected {
                theme::highlighted()
            } else {
                theme::normal()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
