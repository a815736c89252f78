//! Headless replay of a move list.

use crate::games::tictactoe::{
    GameAction, GameState, GameStatus, GameView, HistoryView, Position, SortOrder, Square,
};
use std::fmt;
use tracing::{debug, instrument};

/// Plays `cells` in order from a fresh game, then optionally jumps.
///
/// Ignored moves (occupied square, decided board) are skipped exactly as
/// they are in the interactive UI.
#[instrument(skip(cells), fields(moves = cells.len()))]
pub fn replay(cells: &[Position], jump: Option<usize>) -> GameState {
    let state = cells
        .iter()
        .fold(GameState::new(), |state, &pos| state.apply(GameAction::Play(pos)));
    let state = match jump {
        Some(step) => state.apply(GameAction::JumpTo(step)),
        None => state,
    };
    debug!(step = state.current_step(), "Replay finished");
    state
}

/// Derives the view for a replayed game.
pub fn replay_view(cells: &[Position], jump: Option<usize>, order: SortOrder) -> GameView {
    GameView::derive(&replay(cells, jump), &HistoryView::new(order))
}

/// Formats a view as plain text: board, status, then history.
///
/// The current history step is marked with `>`.
pub fn render_text(view: &GameView) -> String {
    TextView(view).to_string()
}

/// Plain-text rendering of a [`GameView`].
struct TextView<'a>(&'a GameView);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        for row in view.cells.chunks(3) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match cell.square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", view.status)?;
        if let GameStatus::Won { line } = view.status {
            let [a, b, c] = line.indices();
            writeln!(f, "Winning line: {a} {b} {c}")?;
        }
        writeln!(f)?;

        for entry in &view.history {
            let marker = if entry.selected { '>' } else { ' ' };
            writeln!(f, "{marker} {}", entry.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    /// Accepts a fixed number of bytes, then fails.
    struct Limited(usize);

    impl Write for Limited {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 = self.0.checked_sub(s.len()).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    fn cells(indices: &[usize]) -> Vec<Position> {
        indices.iter().filter_map(|&i| Position::from_index(i)).collect()
    }

    #[test]
    fn test_replay_skips_ignored_moves() {
        let state = replay(&cells(&[4, 4, 0]), None);
        assert_eq!(state.current_step(), 2);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_replay_with_jump() {
        let state = replay(&cells(&[4, 0, 8]), Some(1));
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.history().len(), 4);
    }

    #[test]
    fn test_render_text() {
        let view = replay_view(&cells(&[0, 1, 4, 2, 8]), None, SortOrder::Ascending);
        let text = render_text(&view);
        let expected = "\
X O O
. X .
. . X

Winner: X
Winning line: 0 4 8

  Go to game start
  Go to move #1 (row: 1, col: 1)
  Go to move #2 (row: 1, col: 2)
  Go to move #3 (row: 2, col: 2)
  Go to move #4 (row: 1, col: 3)
> Go to move #5 (row: 3, col: 3)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_in_progress_after_jump() {
        let view = replay_view(&cells(&[4, 0]), Some(1), SortOrder::Descending);
        let expected = "\
. . .
. X .
. . .

Next player: O

  Go to move #2 (row: 1, col: 1)
> Go to move #1 (row: 2, col: 2)
  Go to game start
";
        assert_eq!(render_text(&view), expected);
    }

    #[test]
    fn test_text_view_propagates_write_errors() {
        let view = replay_view(&cells(&[0, 4]), None, SortOrder::Ascending);
        let full = render_text(&view);

        let mut short = Limited(full.len() / 2);
        assert!(write!(short, "{}", TextView(&view)).is_err());

        let mut enough = Limited(full.len());
        assert!(write!(enough, "{}", TextView(&view)).is_ok());
    }
}
