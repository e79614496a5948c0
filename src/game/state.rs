use crate::error::GameError;

use super::{Grid, Player, MAX_CELLS};

/// Where a piece landed and who dropped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Check that a `height x width` board can be created: both dimensions
/// positive and at most [`MAX_CELLS`] cells in total.
pub fn validate_dimensions(height: usize, width: usize) -> Result<(), GameError> {
    match height.checked_mul(width) {
        Some(cells) if cells > 0 && cells <= MAX_CELLS => Ok(()),
        _ => Err(GameError::InvalidDimensions { height, width }),
    }
}

/// Authoritative grid plus whose turn it is.
///
/// `drop_piece` never advances the turn; the session decides whether the
/// move ended the game and calls `advance_turn` only when it did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    current_player: Player,
}

impl GameState {
    /// Create a fresh state with an empty `height x width` grid, Player 1 to move.
    ///
    /// Grids smaller than four in both directions are accepted; they can only
    /// ever end in a draw.
    pub fn create(height: usize, width: usize) -> Result<Self, GameError> {
        validate_dimensions(height, width)?;
        Ok(GameState {
            grid: Grid::new(height, width),
            current_player: Player::One,
        })
    }

    /// A new state with the same dimensions, as if just created
    pub fn fresh(&self) -> Self {
        GameState {
            grid: Grid::new(self.height(), self.width()),
            current_player: Player::One,
        }
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of pieces on the grid
    pub fn piece_count(&self) -> usize {
        self.grid.piece_count()
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.width() {
            return Err(GameError::InvalidColumn {
                column,
                width: self.width(),
            });
        }
        Ok(())
    }

    /// Lowest empty row in `column`, or `None` if the column is full
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.check_column(column)?;
        Ok(self.grid.landing_row(column))
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column is a no-op and yields `Ok(None)`.
    pub fn drop_piece(&mut self, column: usize) -> Result<Option<Placement>, GameError> {
        let Some(row) = self.find_landing_row(column)? else {
            return Ok(None);
        };

        let player = self.current_player;
        self.grid.set(row, column, player.to_cell());
        Ok(Some(Placement {
            row,
            column,
            player,
        }))
    }

    /// Check if every cell is occupied
    pub fn is_board_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Hand the turn to the other player
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
    }
}
