//! Tic-tac-toe with move history and time travel.

pub mod action;
pub mod history;
pub mod position;
pub mod rules;
pub mod state;
pub mod status;
pub mod types;
pub mod view;

pub use action::{GameAction, Move, MoveRejection};
pub use history::{HistoryEntry, HistoryView, SortOrder};
pub use position::Position;
pub use rules::{WinningLine, find_winning_line};
pub use state::GameState;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView};

/// Alias for the mark a player places.
pub type Mark = Player;
