//! Game state with time-travel history.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::action::{IgnoreReason, MoveEntry, MoveOutcome};
use crate::position::Position;
use crate::rules::{Win, check_winner};
use crate::snapshot::Snapshot;
use crate::status::Status;
use crate::types::{Board, Cell, Player, Square};

/// Authoritative state of one session.
///
/// `history[0]` is always the empty board. Whose turn it is follows from
/// `current_step` alone: X moves on even steps, O on odd ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<Snapshot>,
    current_step: usize,
    ascending: bool,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            ascending: true,
        }
    }

    /// Every snapshot produced so far, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the snapshot being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Snapshot being viewed.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Board being viewed.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// Player to move from the viewed step.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// Winner on the viewed board, evaluated fresh.
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.board())
    }

    /// Status line for the viewed step.
    pub fn status(&self) -> Status {
        Status::derive(self.winner().as_ref(), self.current_step, self.next_player())
    }

    /// Viewed board with the winning line highlighted.
    pub fn cells(&self) -> [Cell; 9] {
        self.board().cells(self.winner().as_ref())
    }

    /// Places the next player's mark at `position`.
    ///
    /// Making a move from an earlier step discards every later snapshot.
    /// Occupied squares and finished boards leave the state untouched.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let active = *self.board();

        if check_winner(&active).is_some() {
            debug!("Board already won, ignoring move");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !active.is_empty(position) {
            debug!("Square occupied, ignoring move");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            info!(discarded, "Discarding future snapshots");
        }
        self.history.truncate(self.current_step + 1);

        let player = self.next_player();
        let board = active.with(position, Square::Occupied(player));
        self.history.push(Snapshot::after(board, position));
        self.current_step = self.history.len() - 1;

        info!(%player, %position, step = self.current_step, "Move applied");
        MoveOutcome::Applied { player, position }
    }

    /// Index form of [`apply_move`](Self::apply_move); indices past 8 are ignored.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.apply_move(position),
            None => {
                warn!(index, "Move index off the board");
                MoveOutcome::Ignored(IgnoreReason::OutOfRange(index))
            }
        }
    }

    /// Views an earlier (or later) snapshot without deleting anything.
    ///
    /// Returns `false` and changes nothing when `step` is not in the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Jump outside history");
            return false;
        }
        self.current_step = step;
        debug!(next = %self.next_player(), "Jumped");
        true
    }

    /// Flips the move list between oldest-first and newest-first.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Toggled move order");
    }

    /// Starts over with an empty board, keeping the display order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        let ascending = self.ascending;
        *self = Self::new();
        self.ascending = ascending;
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = self.history.iter().enumerate().map(|(step, snapshot)| {
            MoveEntry::new(step, snapshot.last_move(), step == self.current_step)
        });
        if self.ascending {
            entries.collect()
        } else {
            entries.rev().collect()
        }
    }

    /// Builds a game with the display order set.
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
