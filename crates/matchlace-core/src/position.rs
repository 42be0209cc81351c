//! Grid coordinates.

use std::fmt::{self, Display};

/// A cell coordinate, `row` counted from the top and `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell to the right, if it lies within `cols` columns.
    #[must_use]
    pub const fn right(self, cols: usize) -> Option<Self> {
        if self.col + 1 < cols {
            Some(Self::new(self.row, self.col + 1))
        } else {
            None
        }
    }

    /// Returns the cell below, if it lies within `rows` rows.
    #[must_use]
    pub const fn down(self, rows: usize) -> Option<Self> {
        if self.row + 1 < rows {
            Some(Self::new(self.row + 1, self.col))
        } else {
            None
        }
    }

    /// Returns `true` if the two positions share an edge.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
