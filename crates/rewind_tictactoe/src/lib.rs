//! Tic-tac-toe with time-travel history.
//!
//! [`GameState`] keeps every board reached during a session. Players can
//! jump back to any earlier step, look around, and play on from there,
//! which discards the steps that followed.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position, Status};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! assert_eq!(game.status(), Status::NextPlayer(Player::X));
//!
//! game.jump_to(1);
//! assert_eq!(game.next_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod snapshot;
mod state;
mod status;
mod types;

pub use action::{IgnoreReason, MoveEntry, MoveOutcome};
pub use position::Position;
pub use rules::{Win, check_winner};
pub use snapshot::Snapshot;
pub use state::GameState;
pub use status::Status;
pub use types::{Board, Cell, Player, Square};
