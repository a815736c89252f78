//! Read-only view models handed to a rendering host.

use super::history::{HistoryEntry, HistoryView, SortOrder};
use super::rules::find_winning_line;
use super::status::GameStatus;
use super::{GameState, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One board cell as the host should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Cell contents.
    pub square: Square,
    /// Whether the cell lies on the winning line.
    pub winning: bool,
}

/// Everything needed to render one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The nine cells of the current board, row-major.
    pub cells: [CellView; 9],
    /// Status line.
    pub status: GameStatus,
    /// History entries in display order.
    pub history: Vec<HistoryEntry>,
    /// Order of `history`.
    pub order: SortOrder,
}

impl GameView {
    /// Derives the view for `state`.
    ///
    /// The winning line is computed once here and shared by the status and
    /// every cell.
    #[instrument(skip_all, fields(step = state.current_step()))]
    pub fn derive(state: &GameState, history: &HistoryView) -> Self {
        let board = state.current_board();
        let line = find_winning_line(board);
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            winning: line.is_some_and(|l| l.contains(position)),
        });

        Self {
            cells,
            status: GameStatus::derive(board, line, state.next_player()),
            history: history.entries(state),
            order: history.order(),
        }
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_winning_cells_flagged() {
        let state = [0, 1, 4, 2, 8]
            .into_iter()
            .filter_map(Position::from_index)
            .fold(GameState::new(), GameState::apply_move);
        let view = GameView::derive(&state, &HistoryView::default());

        let winning: Vec<_> = view
            .cells
            .iter()
            .filter(|c| c.winning)
            .map(|c| c.position.to_index())
            .collect();
        assert_eq!(winning, [0, 4, 8]);
        assert_eq!(view.status.winner(), Some(Player::X));
        assert_eq!(view.cell(Position::TopCenter).square, Square::Occupied(Player::O));
    }

    #[test]
    fn test_no_cells_flagged_in_progress() {
        let view = GameView::derive(&GameState::new(), &HistoryView::new(SortOrder::Descending));
        assert!(view.cells.iter().all(|c| !c.winning));
        assert_eq!(view.status.to_string(), "Next player: X");
        assert_eq!(view.order, SortOrder::Descending);
        assert_eq!(view.history.len(), 1);
    }
}
