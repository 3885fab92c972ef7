//! Square addressing and direction arithmetic.
//!
//! Rows grow from Black's back rank (row 0) towards White's (row 7); columns
//! grow from the queen-side corner (column 0) to the king-side corner
//! (column 7).

use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// A `(row_delta, col_delta)` step.
pub type Direction = (i8, i8);

/// North, south, east and west unit steps.
pub const AXIAL_DIRECTIONS: [Direction; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal unit steps.
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A board coordinate. Ordering is by row, then column.
///
/// A `Square` may hold off-board components after an unchecked
/// [`Square::offset`]; check [`Square::in_bounds`] before using it as an
/// address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True iff both components lie in `0..8`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Shifts the square without bounds checking.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Shifts the square by a direction vector without bounds checking.
    #[inline]
    pub const fn step(self, direction: Direction) -> Self {
        self.offset(direction.0, direction.1)
    }

    /// Shifts the square, returning `None` when the result leaves the board.
    #[inline]
    pub fn checked_offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let moved = self.offset(d_row, d_col);
        moved.in_bounds().then_some(moved)
    }

    /// Row-major iteration over all 64 on-board squares.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row distance plus column distance.
#[inline]
pub fn manhattan_distance(a: Square, b: Square) -> i8 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
