//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::games::tictactoe::{CellView, GameView, Player, Position, Square};

/// Renders the board, highlighting the winning line and the cursor.
///
/// `cursor` is `None` when the board does not have focus.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, cursor: Option<Position>) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in view.cells.chunks(3).enumerate() {
        render_row(f, rows[row * 2], chunk, cursor);
        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, cells: &[CellView], cursor: Option<Position>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        render_square(f, cols[col * 2], cell, cursor == Some(cell.position));
        if col < 2 {
            render_vertical_sep(f, cols[col * 2 + 1]);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let (text, mut style) = match cell.square {
        Square::Empty => (
            format!("{}", cell.position.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad to the middle line of the three-line cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
