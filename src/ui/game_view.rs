use crate::config::PlayersConfig;
use crate::game::{Cell, Player, Position, Session};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the game screen needs from the app.
pub struct GameView<'a> {
    pub session: &'a Session,
    pub players: &'a PlayersConfig,
    pub selected_column: usize,
    pub message: Option<&'a str>,
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

pub fn render(frame: &mut Frame, view: &GameView<'_>) {
    let height = u16::try_from(view.session.state().height()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Min(height.saturating_add(4)), // Board
            Constraint::Length(3),                     // Message
            Constraint::Length(3),                     // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Start screen shown before the first game.
pub fn render_title(frame: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CONNECT FOUR",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Players alternate dropping pieces into columns."),
        Line::from("First to four in a row (across, down, or diagonal) wins."),
        Line::from(""),
        Line::from(Span::styled(
            "[ Play Game ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter: Play  |  Q: Quit"),
    ];

    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(title, frame.area());
}

fn render_header(frame: &mut Frame, view: &GameView<'_>, area: Rect) {
    let session = view.session;
    let current_player = session.state().current_player();
    let color = player_color(current_player);
    let moves = session.moves().len();

    let status = if session.is_terminal() {
        format!("Game Over  |  {} moves", moves)
    } else {
        format!(
            "Current Player: {}  |  Move {}",
            view.players.name_of(current_player),
            moves + 1
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &GameView<'_>, area: Rect) {
    let state = view.session.state();
    let grid = state.grid();
    let width = grid.width();
    let winning_line = view.session.winning_line();
    let last = view.session.last_move().map(|m| Position::new(m.row, m.column));
    let selector_visible = !view.session.is_terminal();

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if selector_visible && col == view.selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let bar = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{bar}╗")));

    for row in 0..grid.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let pos = Position::new(row, col);
            let (symbol, color) = match grid.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::PlayerOne => (" ● ", player_color(Player::One)),
                Cell::PlayerTwo => (" ● ", player_color(Player::Two)),
            };
            let mut style = Style::default().fg(color);
            if winning_line.is_some_and(|line| line.contains(&pos)) {
                style = style.bg(Color::White).add_modifier(Modifier::BOLD);
            } else if last == Some(pos) {
                style = style.add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{bar}╝")));

    if selector_visible {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..width {
            if col == view.selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  N: New Game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
