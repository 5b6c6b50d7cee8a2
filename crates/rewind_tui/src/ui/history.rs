//! Move history sidebar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;
use crate::input::Focus;

/// Renders the move list in display order, marking the viewed step.
pub fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let focused = *app.focus() == Focus::History;

    let items: Vec<ListItem> = game
        .moves()
        .iter()
        .map(|entry| {
            if *entry.is_current() {
                ListItem::new(format!("● {}", entry))
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(format!("  {}", entry))
            }
        })
        .collect();

    let order = if game.is_ascending() {
        "▲ ascending"
    } else {
        "▼ descending"
    };
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!("History {}", order)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol(if focused { "> " } else { "  " });

    let mut state = ListState::default().with_selected(Some(*app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
