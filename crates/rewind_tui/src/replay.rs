//! Headless replay of a move list.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameState, MoveOutcome, Player, Status};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// A `--moves` token that is not a board index.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move {:?} at position {}: expected an index 0-8", token, index)]
pub struct ReplayError {
    /// The offending token.
    pub token: String,
    /// Its place in the list, starting at 1.
    pub index: usize,
}

/// Parses a comma-separated list of board indices.
///
/// Empty input is an empty list. Values above 8 parse fine and are
/// reported as ignored moves when replayed.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ReplayError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<usize>().map_err(|_| ReplayError {
                token: token.to_string(),
                index: i + 1,
            })
        })
        .collect()
}

/// Result of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Outcome of every requested move, in order.
    pub outcomes: Vec<MoveOutcome>,
    /// Step being viewed.
    pub current_step: usize,
    /// Status line for the viewed step.
    pub status: Status,
    /// Status as displayed.
    pub status_text: String,
    /// Viewed board, row-major.
    pub board: Vec<Option<Player>>,
    /// Move list in display order.
    pub moves: Vec<String>,
    /// Full game state.
    pub game: GameState,
}

impl ReplayReport {
    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if !outcome.is_applied() {
                out.push_str(&format!("#{}: {}\n", i + 1, outcome));
            }
        }
        out.push_str(&self.game.board().display());
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out.push_str("\n\nHistory:\n");
        for line in &self.moves {
            out.push_str(&format!("  {}\n", line));
        }
        out
    }
}

/// Replays `moves` from an empty board, then optionally jumps to `jump`.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, ascending: bool) -> ReplayReport {
    let mut game = GameState::new().with_ascending(ascending);
    let outcomes: Vec<MoveOutcome> = moves.iter().map(|&i| game.apply_index(i)).collect();
    debug!(applied = outcomes.iter().filter(|o| o.is_applied()).count(), "Moves replayed");

    if let Some(step) = jump
        && !game.jump_to(step)
    {
        warn!(step, "Jump ignored");
    }

    let status = game.status();
    ReplayReport {
        outcomes,
        current_step: game.current_step(),
        status,
        status_text: status.to_string(),
        board: game.board().squares().iter().map(|s| s.player()).collect(),
        moves: game.moves().iter().map(ToString::to_string).collect(),
        game,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_moves("4, 0,8").unwrap(), vec![4, 0, 8]);
        assert_eq!(parse_moves("").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_moves("1,,2,").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_moves("4,x").unwrap_err();
        assert_eq!(err.token, "x");
        assert_eq!(err.index, 2);
        assert!(err.to_string().contains("expected an index 0-8"));
    }
}
