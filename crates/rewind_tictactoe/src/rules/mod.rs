//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separate from
//! history bookkeeping so every frame can re-evaluate them cheaply.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, Win, check_winner};
