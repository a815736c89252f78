//! Status line derivation.

use super::rules::{WinningLine, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the game at the selected step.
///
/// Derived from the board on every render; never stored in the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner yet and empty squares remain.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line is complete.
    #[display("Winner: {}", line.player())]
    Won {
        /// The completed line.
        line: WinningLine,
    },
    /// Board full without a winning line.
    #[display("Draw: no more moves")]
    Draw,
}

impl GameStatus {
    /// Derives the status from the current board.
    ///
    /// `line` must be the result of
    /// [`find_winning_line`](super::rules::find_winning_line) on `board`.
    #[instrument(skip(board))]
    pub fn derive(board: &Board, line: Option<WinningLine>, next: Player) -> Self {
        match line {
            Some(line) => GameStatus::Won { line },
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress { next },
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { line } => Some(line.player()),
            _ => None,
        }
    }
}
