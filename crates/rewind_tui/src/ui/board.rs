//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Cell, Player, Square};

use crate::app::App;
use crate::input::Focus;

/// Renders the viewed board with cursor and winning line.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let border = if *app.focus() == Focus::Board {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!("Board · step {}", app.game().current_step()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let cells = app.game().cells();
    let cursor = app.cursor().to_index();
    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
            ])
            .split(rows[row]);
        for (col, offset) in [(0, 0), (2, 1), (4, 2)] {
            let index = start + offset;
            render_cell(frame, cols[col], cells[index], index, index == cursor);
        }
        render_vertical_sep(frame, cols[1]);
        render_vertical_sep(frame, cols[3]);
    }
    render_separator(frame, rows[1]);
    render_separator(frame, rows[3]);
}

fn render_cell(frame: &mut Frame, area: Rect, cell: Cell, index: usize, under_cursor: bool) {
    let (symbol, base_style) = match cell.square {
        Square::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cell.highlighted {
        base_style.fg(Color::Black).bg(Color::Green)
    } else {
        base_style
    };
    let style = if under_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    // Vertically center the mark in the three-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
