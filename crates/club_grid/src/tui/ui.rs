//! Stateless UI rendering for the club grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use crate::api::FootballData;
use crate::clubs::Shuffler;
use crate::controller::MatchSession;
use club_grid_board::{Cell, GameStatus, Square, Symbol};

const CELL_WIDTH: u16 = 18;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw<D: FootballData, S: Shuffler>(frame: &mut Frame, app: &App<D, S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title + turn
            Constraint::Min(14),    // Grid
            Constraint::Length(3),  // Name input
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let controller = app.controller();

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Club Grid - Football Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(controller.turn_indicator()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match controller.session() {
        Some(session) => draw_grid(frame, chunks[1], session, app.cursor()),
        None => {
            let empty = Paragraph::new("No match loaded.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, chunks[1]);
        }
    }

    let input_style = if controller.verify_enabled() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(app.input())
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title("Player name"));
    frame.render_widget(input, chunks[2]);

    let status = match app.busy() {
        Some(busy) => busy,
        None => controller.message(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[3]);

    let mut help = String::from("arrows: move  tab: select  enter: verify  esc: quit");
    if controller.restart_available() {
        help.push_str("  ctrl-r: new match");
    }
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_grid(frame: &mut Frame, area: Rect, session: &MatchSession, cursor: Cell) {
    let grid_area = center_rect(area, CELL_WIDTH * 4, CELL_HEIGHT * 4);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 4])
        .split(grid_area);

    let criteria = session.criteria();
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 4])
            .split(*row_area);

        for (c, cell_area) in cols.iter().enumerate() {
            match (r, c) {
                (0, 0) => {}
                (0, c) => draw_header(frame, *cell_area, &criteria.columns()[c - 1].name),
                (r, 0) => draw_header(frame, *cell_area, &criteria.rows()[r - 1].name),
                (r, c) => {
                    if let Some(cell) = Cell::new(r - 1, c - 1) {
                        draw_cell(frame, *cell_area, session, cell, cursor);
                    }
                }
            }
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect, name: &str) {
    let header = Paragraph::new(name)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn draw_cell(frame: &mut Frame, area: Rect, session: &MatchSession, cell: Cell, cursor: Cell) {
    let game = session.game();
    let (text, base_style) = match game.board().get(cell) {
        Square::Empty => (String::new(), Style::default().fg(Color::DarkGray)),
        Square::Taken(symbol) => {
            let color = match symbol {
                Symbol::X => Color::Blue,
                Symbol::O => Color::Red,
            };
            let label = session
                .answer(cell)
                .map(str::to_string)
                .unwrap_or_else(|| symbol.to_string());
            (label, Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
    };

    let border_style = if session.selected() == Some(cell) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if cell == cursor && game.status() == GameStatus::InProgress {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(text)
        .style(base_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
