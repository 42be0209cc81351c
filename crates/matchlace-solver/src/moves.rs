//! Adjacent-swap moves.

use std::fmt::{self, Display};

use matchlace_core::{Grid, Position};

/// A swap of two edge-adjacent cells.
///
/// Moves are unordered pairs; the constructor stores the positions in
/// row-major order so that equal swaps compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    first: Position,
    second: Position,
}

impl Move {
    /// Creates a move between two cells.
    ///
    /// Returns `None` unless the cells share an edge; diagonal and
    /// wrap-around swaps are not moves.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Option<Self> {
        a.is_adjacent(b).then(|| Self {
            first: a.min(b),
            second: a.max(b),
        })
    }

    /// Enumerates every move on a `rows` x `cols` grid in canonical order.
    ///
    /// Cells are visited in row-major order; for each cell the swap with its
    /// right neighbor comes before the swap with the cell below. Move search
    /// relies on this order to break ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use matchlace_core::Position;
    /// use matchlace_solver::Move;
    ///
    /// let moves: Vec<_> = Move::candidates(2, 2).collect();
    /// assert_eq!(moves.len(), 4);
    /// assert_eq!(moves[0].positions(), (Position::new(0, 0), Position::new(0, 1)));
    /// assert_eq!(moves[1].positions(), (Position::new(0, 0), Position::new(1, 0)));
    /// ```
    pub fn candidates(rows: usize, cols: usize) -> impl Iterator<Item = Self> {
        (0..rows * cols).flat_map(move |i| {
            let pos = Position::new(i / cols, i % cols);
            [pos.right(cols), pos.down(rows)]
                .into_iter()
                .flatten()
                .map(move |other| Self {
                    first: pos,
                    second: other,
                })
        })
    }

    /// Returns the two swapped positions, upper-left first.
    #[must_use]
    pub const fn positions(self) -> (Position, Position) {
        (self.first, self.second)
    }

    /// Swaps the two cells in `grid`.
    ///
    /// # Panics
    ///
    /// Panics if the move lies outside the grid.
    pub fn apply(self, grid: &mut Grid) {
        grid.swap(self.first, self.second);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}
