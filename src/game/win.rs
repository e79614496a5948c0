//! Four-in-a-row detection.
//!
//! [`check_for_win`] is the exhaustive scan: every cell is tried as the
//! anchor of a four-cell line in each [`Direction`]. [`check_win_at`] only
//! looks at the lines through one placed piece and is what the session uses
//! after each drop. The two agree whenever the grid held no line for that
//! player before the piece went in.

use super::board::{Cell, Grid, Position};
use super::player::Player;

/// Number of same-player cells in a winning line.
pub const WIN_LENGTH: usize = 4;

/// Direction a line extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order used by [`find_win_line`].
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(row, column)` step between consecutive cells of a line
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// The four cells of the line anchored at `(row, col)`, or `None` if any of
/// them falls off the grid.
fn line_from(grid: &Grid, row: usize, col: usize, direction: Direction) -> Option<[Position; WIN_LENGTH]> {
    let (dy, dx) = direction.step();
    let mut line = [Position::new(row, col); WIN_LENGTH];
    for (i, pos) in line.iter_mut().enumerate() {
        let r = row as isize + dy * i as isize;
        let c = col as isize + dx * i as isize;
        grid.get_checked(r, c)?;
        *pos = Position::new(r as usize, c as usize);
    }
    Some(line)
}

/// First win line for `player`, scanning anchors row-major and directions in
/// [`Direction::ALL`] order.
pub fn find_win_line(grid: &Grid, player: Player) -> Option<[Position; WIN_LENGTH]> {
    let marker = player.to_cell();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            for direction in Direction::ALL {
                let Some(line) = line_from(grid, row, col, direction) else {
                    continue;
                };
                if line.iter().all(|p| grid.get(p.row, p.column) == marker) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Whether `player` has four in a row anywhere on the grid
pub fn check_for_win(grid: &Grid, player: Player) -> bool {
    find_win_line(grid, player).is_some()
}

/// Count consecutive `cell`s from `(row, col)` (exclusive) stepping by `(dy, dx)`
fn run_length(grid: &Grid, row: usize, col: usize, dy: isize, dx: isize, cell: Cell) -> usize {
    let mut count = 0;
    let mut r = row as isize + dy;
    let mut c = col as isize + dx;
    while grid.get_checked(r, c) == Some(cell) {
        count += 1;
        r += dy;
        c += dx;
    }
    count
}

/// Check whether the piece at `(row, col)` sits on a line of four or more of
/// its owner's pieces. Empty cells never win.
pub fn check_win_at(grid: &Grid, row: usize, col: usize) -> bool {
    let cell = grid.get(row, col);
    if cell.is_empty() {
        return false;
    }

    Direction::ALL.iter().any(|direction| {
        let (dy, dx) = direction.step();
        let count = 1
            + run_length(grid, row, col, dy, dx, cell)
            + run_length(grid, row, col, -dy, -dx, cell);
        count >= WIN_LENGTH
    })
}
