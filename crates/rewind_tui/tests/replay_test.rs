//! Tests for headless replay.

use rewind_tictactoe::{IgnoreReason, MoveOutcome, Player, Position, Status};
use rewind_tui::{parse_moves, replay};

#[test]
fn test_replay_to_win() {
    let moves = parse_moves("0,3,1,4,2").unwrap();
    let report = replay(&moves, None, true);
    assert_eq!(report.status, Status::Winner(Player::X));
    assert_eq!(report.status_text, "Winner: X");
    assert_eq!(report.current_step, 5);
    assert_eq!(report.moves.len(), 6);
    assert_eq!(report.moves[0], "Go to game start");
}

#[test]
fn test_replay_reports_ignored_moves() {
    let report = replay(&[4, 4, 12], None, true);
    assert!(report.outcomes[0].is_applied());
    assert_eq!(
        report.outcomes[1],
        MoveOutcome::Ignored(IgnoreReason::SquareOccupied(Position::Center))
    );
    assert_eq!(report.outcomes[2], MoveOutcome::Ignored(IgnoreReason::OutOfRange(12)));
    assert_eq!(report.current_step, 1);

    let text = report.to_text();
    assert!(text.contains("#2: move ignored: Center is already occupied"));
    assert!(text.contains("#3: move ignored: index 12 is off the board"));
}

#[test]
fn test_replay_with_jump_and_descending() {
    let report = replay(&[4, 0, 8], Some(1), false);
    assert_eq!(report.current_step, 1);
    assert_eq!(report.status_text, "Next player: O");
    assert_eq!(report.moves.first().map(String::as_str), Some("Go to move #3: row 2, column 2"));
    assert_eq!(report.board[4], Some(Player::X));
    assert_eq!(report.board[0], None);
}

#[test]
fn test_replay_ignores_bad_jump() {
    let report = replay(&[4], Some(7), true);
    assert_eq!(report.current_step, 1);
}

#[test]
fn test_report_json() {
    let report = replay(&[4, 0], None, true);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["current_step"], 2);
    assert_eq!(json["status_text"], "Next player: X");
    assert_eq!(json["board"][4], "X");
    assert_eq!(json["game"]["history"].as_array().unwrap().len(), 3);
}
