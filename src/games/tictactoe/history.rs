//! Move history view.
//!
//! Turns the move history into labelled entries for display. The only state
//! kept here is the sort order, which reorders entries and never touches the
//! [`GameState`].

use super::GameState;
use super::action::Move;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of history entries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// Whether this is the current step.
    pub selected: bool,
}

impl HistoryEntry {
    fn new(step: usize, mv: &Move, current_step: usize) -> Self {
        let label = match (mv.row(), mv.column()) {
            (Some(row), Some(col)) => format!("Go to move #{step} (row: {row}, col: {col})"),
            _ => "Go to game start".to_string(),
        };
        Self {
            step,
            label,
            selected: step == current_step,
        }
    }
}

/// History list with a sort-order toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryView {
    order: SortOrder,
}

impl HistoryView {
    /// Creates a view showing entries in `order`.
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }

    /// Current display order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Flips the display order.
    #[instrument(skip(self), fields(from = %self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(to = %self.order, "Toggled history order");
    }

    /// Builds the entries for `state` in display order.
    pub fn entries(&self, state: &GameState) -> Vec<HistoryEntry> {
        let mut entries: Vec<_> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, mv)| HistoryEntry::new(step, mv, state.current_step()))
            .collect();
        if self.order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }
}
