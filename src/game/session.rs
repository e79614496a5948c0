//! Turn/session state machine: the only entry point a front end needs.
//!
//! A session owns one [`GameState`] at a time. Each `column_selected` call is
//! one user action; its [`MoveResult`] tells the front end what to render.

use log::{debug, info, trace};

use crate::error::GameError;

use super::state::GameState;
use super::win::{check_win_at, find_win_line, WIN_LENGTH};
use super::{Player, Position};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} won!"),
            GameOutcome::Draw => f.write_str("Tie!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl SessionStatus {
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            SessionStatus::InProgress => None,
            SessionStatus::Won(player) => Some(GameOutcome::Win(player)),
            SessionStatus::Draw => Some(GameOutcome::Draw),
        }
    }

    pub fn is_terminal(self) -> bool {
        self != SessionStatus::InProgress
    }
}

/// An accepted drop. `sequence` starts at 1 for the first piece of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
    pub sequence: usize,
}

/// What happened in response to one `column_selected` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The column was full; nothing changed.
    Ignored,
    /// A piece was placed and play continues with the other player.
    Dropped(Move),
    /// A piece was placed and it ended the game.
    Ended(Move, GameOutcome),
}

impl MoveResult {
    /// The placed piece, if any
    pub fn placed(&self) -> Option<&Move> {
        match self {
            MoveResult::Ignored => None,
            MoveResult::Dropped(mv) | MoveResult::Ended(mv, _) => Some(mv),
        }
    }

    /// Replay this result onto a presenter: the drop first, then the ending.
    pub fn notify<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        match *self {
            MoveResult::Ignored => presenter.move_ignored(),
            MoveResult::Dropped(mv) => presenter.piece_dropped(&mv),
            MoveResult::Ended(mv, outcome) => {
                presenter.piece_dropped(&mv);
                presenter.game_ended(outcome);
            }
        }
    }
}

/// Callbacks a front end implements to render session events.
pub trait Presenter {
    /// The selected column had no room.
    fn move_ignored(&mut self) {}

    /// A piece landed and must be drawn.
    fn piece_dropped(&mut self, mv: &Move);

    /// The game is over; announce it and stop forwarding column input.
    fn game_ended(&mut self, outcome: GameOutcome);
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    status: SessionStatus,
    moves: Vec<Move>,
}

impl Session {
    /// Start a session with a fresh `height x width` game
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let session = Session {
            state: GameState::create(height, width)?,
            status: SessionStatus::InProgress,
            moves: Vec::new(),
        };
        info!("new {height}x{width} game");
        Ok(session)
    }

    /// Discard the current game, whatever its status, and start a fresh one
    pub fn new_game(&mut self, height: usize, width: usize) -> Result<(), GameError> {
        *self = Session::new(height, width)?;
        Ok(())
    }

    /// New game with the current dimensions
    pub fn restart(&mut self) {
        info!("restarting {}x{} game", self.state.height(), self.state.width());
        self.state = self.state.fresh();
        self.status = SessionStatus::InProgress;
        self.moves.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.status.outcome()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted moves of the current game, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// The line that won the game, if it was won
    pub fn winning_line(&self) -> Option<[Position; WIN_LENGTH]> {
        match self.status {
            SessionStatus::Won(player) => find_win_line(self.state.grid(), player),
            _ => None,
        }
    }

    /// Handle one column-drop input.
    ///
    /// A full board is checked before four-in-a-row, so a last piece that
    /// both fills the board and completes a line is reported as a draw.
    pub fn column_selected(&mut self, column: usize) -> Result<MoveResult, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let Some(placed) = self.state.drop_piece(column)? else {
            trace!("column {column} is full, ignoring");
            return Ok(MoveResult::Ignored);
        };

        let mv = Move {
            column: placed.column,
            row: placed.row,
            player: placed.player,
            sequence: self.moves.len() + 1,
        };
        self.moves.push(mv);
        debug!(
            "move #{}: {} -> ({}, {})",
            mv.sequence, mv.player, mv.row, mv.column
        );

        if self.state.is_board_full() {
            self.status = SessionStatus::Draw;
            info!("game drawn after {} moves", mv.sequence);
            return Ok(MoveResult::Ended(mv, GameOutcome::Draw));
        }

        if check_win_at(self.state.grid(), mv.row, mv.column) {
            self.status = SessionStatus::Won(mv.player);
            info!("{} won after {} moves", mv.player, mv.sequence);
            return Ok(MoveResult::Ended(mv, GameOutcome::Win(mv.player)));
        }

        self.state.advance_turn();
        Ok(MoveResult::Dropped(mv))
    }
}
