//! Plain-text front end: renders the grid as ASCII and records session
//! events as lines. Used by the binary's headless `--moves` mode.

use std::io::{self, Write};

use log::debug;

use crate::config::PlayersConfig;
use crate::error::GameError;
use crate::game::{Cell, GameOutcome, Grid, Move, Presenter, Session};

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::PlayerOne => 'X',
        Cell::PlayerTwo => 'O',
    }
}

/// Render the grid with a 1-based column header, top row first.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::new();
    for col in 0..grid.width() {
        out.push_str(&format!("{:>3}", col + 1));
    }
    out.push('\n');
    for row in 0..grid.height() {
        for &cell in grid.row(row) {
            out.push_str("  ");
            out.push(cell_symbol(cell));
        }
        out.push('\n');
    }
    out
}

/// A [`Presenter`] that turns session events into human-readable lines.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    players: PlayersConfig,
    lines: Vec<String>,
}

impl EventLog {
    pub fn new(players: PlayersConfig) -> Self {
        EventLog {
            players,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push(&mut self, line: String) {
        debug!("{line}");
        self.lines.push(line);
    }
}

impl Presenter for EventLog {
    fn move_ignored(&mut self) {
        self.push("column is full, move ignored".to_string());
    }

    fn piece_dropped(&mut self, mv: &Move) {
        let name = self.players.name_of(mv.player).to_string();
        self.push(format!(
            "#{} {} -> column {} (row {})",
            mv.sequence,
            name,
            mv.column + 1,
            mv.row + 1
        ));
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        let line = match outcome {
            GameOutcome::Win(player) => format!("{} won!", self.players.name_of(player)),
            GameOutcome::Draw => "Tie!".to_string(),
        };
        self.push(line);
    }
}

/// Write every recorded event line to `out`, one per line.
pub fn write_events<W: Write + ?Sized>(log: &EventLog, out: &mut W) -> io::Result<()> {
    for line in log.lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Feed 0-based `columns` into the session until they run out or the game
/// ends. Columns after a terminal move are not forwarded.
///
/// Returns how many columns were consumed.
pub fn run_script<P: Presenter + ?Sized>(
    session: &mut Session,
    columns: &[usize],
    presenter: &mut P,
) -> Result<usize, GameError> {
    for (consumed, &column) in columns.iter().enumerate() {
        if session.is_terminal() {
            return Ok(consumed);
        }
        session.column_selected(column)?.notify(presenter);
    }
    Ok(columns.len())
}
