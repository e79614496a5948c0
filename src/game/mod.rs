//! Core Connect Four game logic: grid, players, win detection, and the
//! turn/session state machine.

mod board;
mod player;
mod session;
mod state;
mod win;

pub use board::{Cell, Grid, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS};
pub use player::Player;
pub use session::{GameOutcome, Move, MoveResult, Presenter, Session, SessionStatus};
pub use state::{validate_dimensions, GameState, Placement};
pub use win::{check_for_win, check_win_at, find_win_line, Direction, WIN_LENGTH};
