//! Board snapshots recorded in the game history.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Board;

/// One immutable board state plus the square filled to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Snapshot reached by filling `position`.
    pub(crate) fn after(board: Board, position: Position) -> Self {
        Self {
            board,
            last_move: Some(position),
        }
    }

    /// Board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square filled to produce this snapshot; `None` for the game start.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}
