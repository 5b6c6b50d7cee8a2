//! Rendering tests against ratatui's test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use rewind_tui::{App, TuiConfig, ui};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn render(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn screen(app: &App) -> String {
    render(app).join("\n")
}

#[test]
fn test_initial_screen() {
    let app = App::new(&TuiConfig::default());
    let text = screen(&app);
    assert!(text.contains("Rewind - Tic Tac Toe"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("History ▲ ascending"));
    assert!(text.contains("● Go to game start"));
}

#[test]
fn test_moves_listed_with_coordinates() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('3'));
    let text = screen(&app);
    assert!(text.contains("Go to move #1: row 1, column 1"));
    assert!(text.contains("● Go to move #2: row 0, column 2"));
    assert!(text.contains("Next player: X"));
}

#[test]
fn test_descending_order_on_screen() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('o'));
    let lines = render(&app);
    let start = lines.iter().position(|l| l.contains("Go to game start")).unwrap();
    let first = lines.iter().position(|l| l.contains("Go to move #1")).unwrap();
    assert!(first < start);
    assert!(screen(&app).contains("History ▼ descending"));
}

#[test]
fn test_winner_shown() {
    let mut app = App::new(&TuiConfig::default());
    for key in ['1', '4', '2', '5', '3'] {
        press(&mut app, KeyCode::Char(key));
    }
    assert!(screen(&app).contains("Winner: X"));
}

#[test]
fn test_tie_shown() {
    let mut app = App::new(&TuiConfig::default());
    for key in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, KeyCode::Char(key));
    }
    assert!(screen(&app).contains("This is a tie!"));
}

#[test]
fn test_hidden_sidebar() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, KeyCode::Char('h'));
    let text = screen(&app);
    assert!(!text.contains("Go to game start"));
    assert!(text.contains("Board · step 0"));
}
