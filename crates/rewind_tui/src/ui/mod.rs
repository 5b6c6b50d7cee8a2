//! Stateless UI rendering using ratatui.

mod board;
mod history;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::Status;

use crate::app::App;

pub use board::render_board;
pub use history::render_history;

const HELP: &str =
    "Arrows: Move | Enter: Play/Jump | 1-9: Play | Tab: Focus | O: Order | H: History | N: New | Q: Quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    if *app.show_sidebar() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_board(frame, body[0], app);
        render_history(frame, body[1], app);
    } else {
        render_board(frame, chunks[1], app);
    }

    let status = app.game().status();
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::Tie => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status_line = Paragraph::new(format!("{}  ·  {}", status, app.message()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_line, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}
