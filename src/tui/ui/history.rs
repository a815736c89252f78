//! Move history list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::games::tictactoe::GameView;

/// Renders the history list.
///
/// The entry for the current step is drawn bold. When the list has focus,
/// `list_cursor` is the step under the list cursor.
pub fn render_history(f: &mut Frame, area: Rect, view: &GameView, list_cursor: Option<usize>) {
    let items: Vec<ListItem> = view
        .history
        .iter()
        .map(|entry| {
            let style = if entry.selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.label.as_str()).style(style)
        })
        .collect();

    let border_style = if list_cursor.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("History [s: {}]", view.order)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(
        list_cursor.and_then(|step| view.history.iter().position(|e| e.step == step)),
    );
    f.render_stateful_widget(list, area, &mut list_state);
}
