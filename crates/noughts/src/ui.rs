//! Tic-tac-toe board rendering.

use crate::app::App;
use crate::config::Config;
use noughts_core::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn render(f: &mut Frame, app: &App, config: &Config) {
    let [title, board, notice, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(CELL_HEIGHT * 3),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(f.area());

    render_turn(f, title, app, config);
    render_board(f, center_rect(board, CELL_WIDTH * 3, CELL_HEIGHT * 3), app, config);
    render_notice(f, notice, app);
    render_help(f, help, app);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_turn(f: &mut Frame, area: Rect, app: &App, config: &Config) {
    let line = match app.turn_indicator() {
        Some(player) => TextLine::from(vec![
            Span::raw("Turn: "),
            Span::styled(config.symbol(player).to_string(), player_style(player)),
        ]),
        None => TextLine::from(format!("Game {}", app.engine().phase())),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App, config: &Config) {
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).split(area);
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_index(r * 3 + c) {
                render_cell(f, *cell_area, app, config, pos);
            }
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, config: &Config, pos: Position) {
    let engine = app.engine();
    let (text, mut style) = match engine.cell(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (config.symbol(player).to_string(), player_style(player)),
    };

    if engine.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border = if pos == app.cursor() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border));
    f.render_widget(paragraph, area);
}

fn render_notice(f: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = app.notice() else {
        return;
    };
    let style = if notice.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let paragraph = Paragraph::new(notice.to_string())
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let mut help = String::from("arrows/hjkl move · enter mark · 1-9 mark cell");
    if app.is_reset_available() {
        help.push_str(" · r reset");
    }
    help.push_str(" · q quit");
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(ratatui::layout::Flex::Center)
        .areas(horizontal);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal
            .draw(|f| render(f, app, &Config::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_turn_and_cells() {
        let app = App::new();
        let text = screen(&app);
        assert!(text.contains("Turn: X"));
        assert!(text.contains('5'));
        assert!(!text.contains("r reset"));
    }

    #[test]
    fn test_renders_winner_notice() {
        let mut app = App::new();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let text = screen(&app);
        assert!(text.contains("Winner! X"));
        assert!(text.contains("Game won"));
        assert!(text.contains("r reset"));
    }

    #[test]
    fn test_reset_hint_survives_reset() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        let text = screen(&app);
        assert_eq!(app.engine().marked_cells(), 0);
        assert!(text.contains("r reset"));
        assert!(text.contains("Turn: X"));
    }
}
