//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// The player owning the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Finds the first line whose three squares hold the same mark.
///
/// Lines are checked rows first, then columns, then the two diagonals.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    positions: [a, b, c],
                    player,
                })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|line| line.player())
}
