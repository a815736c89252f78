//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here reads or
//! changes game state beyond the board it is handed.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, find_winning_line, winner};
