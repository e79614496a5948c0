/// Standard board height, used when nothing else is configured.
pub const DEFAULT_HEIGHT: usize = 6;
/// Standard board width, used when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 7;
/// Largest number of cells a board may have.
pub const MAX_CELLS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A `(row, column)` coordinate. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Fixed-size `height x width` grid of cells, stored row-major.
/// Row 0 is the top, row `height - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }

    /// Get the cell at a signed coordinate, or `None` when it falls off the grid
    pub fn get_checked(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// One row of the grid, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(self.get(row, col).is_empty(), "cells are never overwritten");
        self.cells[row * self.width + col] = cell;
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    /// `None` when the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
