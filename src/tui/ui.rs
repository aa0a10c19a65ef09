//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::input::HitMap;
use crate::games::tictactoe::{GameStatus, MoveEntry, Player, Position, Square, WinResult};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const HELP: &str =
    "arrows/1-9: place  [ ]: step  Home/End: first/last  r: reverse  n: new  q: quit";

/// Draws the whole screen and returns the clickable areas.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let mut hit_map = HitMap::default();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(12),   // Board + history
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH * 3 + 6), Constraint::Min(30)])
        .split(rows[1]);

    draw_board(frame, columns[0], app, &mut hit_map);
    draw_info(frame, columns[1], app, &mut hit_map);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[2]);

    hit_map
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, hit_map: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let outcome = app.state().outcome();
    let board = app.state().current_board();

    for pos in Position::ALL {
        let cell = Rect {
            x: inner.x + 1 + pos.col() as u16 * (CELL_WIDTH + 1),
            y: inner.y + pos.row() as u16 * CELL_HEIGHT,
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        }
        .intersection(inner);
        if cell.is_empty() {
            continue;
        }

        let style = cell_style(board.get(pos), pos, app.cursor(), &outcome);
        let symbol = match board.get(pos) {
            Square::Empty => " ".to_string(),
            Square::Occupied(player) => player.to_string(),
        };
        let text = vec![Line::default(), Line::from(Span::styled(symbol, style))];
        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, cell);
        hit_map.add_cell(cell, pos);
    }
}

fn cell_style(square: Square, pos: Position, cursor: Position, outcome: &WinResult) -> Style {
    let base = match square {
        Square::Empty => Style::default().bg(Color::Black),
        Square::Occupied(Player::X) => Style::default()
            .fg(Color::Blue)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(Color::Red)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    };

    let base = if outcome.highlights(pos) {
        base.bg(Color::Yellow)
    } else {
        base
    };

    if pos == cursor {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, hit_map: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL).title("Game");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Length(1), // Order toggle
            Constraint::Length(1),
            Constraint::Min(1), // Moves
        ])
        .split(inner);

    let status = app.state().status();
    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    };
    frame.render_widget(Paragraph::new(status.to_string()).style(status_style), rows[0]);

    let toggle_label = if app.state().display_reversed() {
        "[ reverse order: on ]"
    } else {
        "[ reverse order: off ]"
    };
    let toggle = Rect {
        width: (toggle_label.len() as u16).min(rows[1].width),
        ..rows[1]
    };
    frame.render_widget(
        Paragraph::new(toggle_label).style(Style::default().fg(Color::Cyan)),
        toggle,
    );
    hit_map.set_toggle(toggle);

    draw_moves(frame, rows[3], app, hit_map);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, hit_map: &mut HitMap) {
    let moves = app.state().moves();
    let visible = area.height as usize;
    let offset = scroll_offset(&moves, visible);

    for (i, entry) in moves.iter().skip(offset).take(visible).enumerate() {
        let row = Rect {
            y: area.y + i as u16,
            height: 1,
            ..area
        };
        let number = entry.step() + 1;
        let label = move_label(entry, app.show_coordinates());
        let style = if entry.is_current() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(format!("{:>2}. {}", number, label)).style(style),
            row,
        );
        hit_map.add_move(row, entry.step());
    }
}

/// First row to draw so the current entry stays on screen.
fn scroll_offset(moves: &[MoveEntry], visible: usize) -> usize {
    let current = moves.iter().position(MoveEntry::is_current).unwrap_or(0);
    (current + 1).saturating_sub(visible)
}

fn move_label(entry: &MoveEntry, show_coordinates: bool) -> String {
    if show_coordinates {
        entry.to_string()
    } else {
        entry.short_label()
    }
}
