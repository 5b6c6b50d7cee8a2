//! Terminal front end for Rewind, tic-tac-toe with time travel.
//!
//! - **App**: key handling over a [`rewind_tictactoe::GameState`]
//! - **UI**: stateless ratatui rendering of board, status and history
//! - **Replay**: headless move application for scripts and tests

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Focus};
pub use replay::{ReplayError, ReplayReport, parse_moves, replay};
