//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Game**: pure game logic. [`GameState`] holds the move history and
//!   selected step and changes only through [`GameState::apply`].
//! - **Views**: [`GameView`] derives everything a host draws (cells,
//!   winning line, status, history entries) from a state.
//! - **Hosts**: a ratatui terminal UI ([`run_tui`]) and a headless
//!   [`replay`] used by the `replay` command.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameAction, GameState, GameView, HistoryView, Position};
//!
//! let state = GameState::new()
//!     .apply(GameAction::Play(Position::Center))
//!     .apply(GameAction::Play(Position::TopLeft));
//! let view = GameView::derive(&state, &HistoryView::default());
//! assert_eq!(view.status.to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, CellView, GameAction, GameState, GameStatus, GameView, HistoryEntry, HistoryView,
    Mark, Move, MoveRejection, Player, Position, SortOrder, Square, WinningLine,
    find_winning_line,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{LINES, is_full, winner};

// Crate-level exports - Hosts
pub use replay::{render_text, replay, replay_view};
pub use tui::{App, Control, Focus, draw, run_app, run_tui};
