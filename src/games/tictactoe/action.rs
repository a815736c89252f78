//! Moves and actions for tic-tac-toe.
//!
//! A [`Move`] is a history record: the board as it stood after the move,
//! and the position that was played to get there. A [`GameAction`] is an
//! input the host feeds into [`GameState::apply`](super::GameState::apply).

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// One entry in the move history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Move {
    board: Board,
    position: Option<Position>,
}

impl Move {
    /// The start-of-game sentinel: empty board, no position.
    pub fn start() -> Self {
        Self::default()
    }

    /// A move that placed a mark at `position`, leaving `board`.
    pub fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// Board snapshot after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position played, `None` for the start of the game.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// One-based row of the played position.
    pub fn row(&self) -> Option<u8> {
        self.position.map(Position::row)
    }

    /// One-based column of the played position.
    pub fn column(&self) -> Option<u8> {
        self.position.map(Position::column)
    }
}

/// Input accepted by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Place the active player's mark.
    Play(Position),
    /// Select a step in the move history.
    JumpTo(usize),
}

/// Why a move was ignored.
///
/// Ignored moves are not reported to the player; this only feeds logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// The board at the current step already has a winning line.
    #[display("Game is already decided")]
    GameDecided,
    /// The target square is taken.
    #[display("Square {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),
}
