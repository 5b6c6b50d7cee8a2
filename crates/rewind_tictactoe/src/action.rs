//! Results of move attempts and entries of the move list.
//!
//! Rejected moves are not errors: the board simply stays as it was. The
//! outcome types say what happened so callers can log or report it.

use serde::Serialize;

use crate::position::Position;
use crate::types::Player;

/// Why a move left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The viewed board already has a winner.
    #[display("game is already over")]
    GameOver,
    /// The square is taken.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
    /// Index outside 0-8.
    #[display("index {_0} is off the board")]
    OutOfRange(usize),
}

/// Result of [`GameState::apply_move`](crate::GameState::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum MoveOutcome {
    /// A new snapshot was appended.
    #[display("{player} played {position}")]
    Applied {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// Nothing changed.
    #[display("move ignored: {_0}")]
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True if the history grew.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct MoveEntry {
    step: usize,
    position: Option<Position>,
    is_current: bool,
}

impl MoveEntry {
    pub(crate) fn new(step: usize, position: Option<Position>, is_current: bool) -> Self {
        Self {
            step,
            position,
            is_current,
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) if self.step > 0 => write!(
                f,
                "Go to move #{}: row {}, column {}",
                self.step,
                pos.row(),
                pos.column()
            ),
            _ => write!(f, "Go to game start"),
        }
    }
}
