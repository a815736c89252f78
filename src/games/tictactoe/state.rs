//! Game state with move history and time travel.
//!
//! [`GameState`] is the only stateful piece of the game. It is changed by
//! exactly two operations, [`GameState::apply_move`] and
//! [`GameState::jump_to_step`], both reached through [`GameState::apply`].
//! Illegal input is ignored: the returned state equals the one passed in.

use super::action::{GameAction, Move, MoveRejection};
use super::rules::find_winning_line;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Full game state: history, selected step, and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<Move>,
    current_step: usize,
    x_is_next: bool,
}

impl GameState {
    /// Creates a new game holding only the start-of-game move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Move::start()],
            current_step: 0,
            x_is_next: true,
        }
    }

    /// Applies an action, returning the next state.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply(self, action: GameAction) -> Self {
        match action {
            GameAction::Play(pos) => self.apply_move(pos),
            GameAction::JumpTo(step) => self.jump_to_step(step),
        }
    }

    /// Places the active player's mark at `pos`.
    ///
    /// History past the current step is discarded first, so playing after a
    /// jump starts a new branch. Ignored if the current board already has a
    /// winning line or the square is taken.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn apply_move(mut self, pos: Position) -> Self {
        if let Err(reason) = self.check_move(pos) {
            debug!(%reason, "Ignoring move");
            return self;
        }

        let player = self.next_player();
        self.history.truncate(self.current_step + 1);
        let mut board = self.current_board().clone();
        board.set(pos, Square::Occupied(player));

        self.current_step = self.history.len();
        self.history.push(Move::new(board, pos));
        self.x_is_next = player.opponent() == Player::X;
        debug_assert_eq!(self.x_is_next, self.current_step % 2 == 0);

        debug!(new_step = self.current_step, "Move applied");
        self
    }

    /// Selects `step` in the history without discarding anything.
    ///
    /// Steps past the end of the history are ignored.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to_step(mut self, step: usize) -> Self {
        if step >= self.history.len() {
            warn!(step, "Ignoring jump past end of history");
            return self;
        }

        self.current_step = step;
        self.x_is_next = step % 2 == 0;
        debug!("Jumped to step");
        self
    }

    /// Reports whether a move at `pos` would be accepted.
    pub fn check_move(&self, pos: Position) -> Result<(), MoveRejection> {
        let board = self.current_board();
        if find_winning_line(board).is_some() {
            return Err(MoveRejection::GameDecided);
        }
        if !board.is_empty(pos) {
            return Err(MoveRejection::CellOccupied(pos));
        }
        Ok(())
    }

    /// Returns the full move history, including steps past the current one.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Index of the selected history entry.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The player who moves next.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// The history entry at the current step.
    pub fn current_move(&self) -> &Move {
        &self.history[self.current_step]
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_move().board()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
