//! Status line derivation.

use serde::Serialize;
use tracing::instrument;

use crate::rules::{Win, is_tie};
use crate::types::Player;

/// What the status line says about the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Someone holds a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Board full with no line.
    #[display("This is a tie!")]
    Tie,
    /// Game continues.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status; a winner takes precedence over a full board.
    #[instrument]
    pub fn derive(winner: Option<&Win>, step: usize, next: Player) -> Self {
        match winner {
            Some(win) => Status::Winner(win.player),
            None if is_tie(step, None) => Status::Tie,
            None => Status::NextPlayer(next),
        }
    }

    /// True once no more moves can be made.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}
