//! Match detection.
//!
//! A match is a maximal horizontal or vertical run of at least
//! [`MIN_RUN`] identical symbols. Rows and columns are scanned
//! independently and their results unioned, so a cell shared by a
//! horizontal and a vertical run is marked once.

use crate::{Cell, Grid, Position};

/// Shortest run of identical symbols that counts as a match.
pub const MIN_RUN: usize = 3;

/// The set of matched cells in a grid.
///
/// Membership is boolean; a cell belonging to two runs is counted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    cols: usize,
    marked: Vec<bool>,
    len: usize,
}

impl MatchSet {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            marked: vec![false; rows * cols],
            len: 0,
        }
    }

    fn mark(&mut self, pos: Position) {
        let slot = &mut self.marked[pos.row * self.cols + pos.col];
        if !*slot {
            *slot = true;
            self.len += 1;
        }
    }

    /// Returns the number of matched cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no cell is matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `pos` is matched.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.cols
            && self
                .marked
                .get(pos.row * self.cols + pos.col)
                .copied()
                .unwrap_or(false)
    }

    /// Iterates over matched positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, marked)| **marked)
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols))
    }
}

impl Grid {
    /// Finds every matched cell.
    ///
    /// Vacant cells never take part in a run. The grid is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use matchlace_core::{Grid, Position};
    ///
    /// let grid: Grid = "
    ///     A A A B
    ///     B C A C
    ///     C B A B
    /// "
    /// .parse()?;
    /// let matches = grid.find_matches();
    /// // three in the top row, three in the third column, sharing (0, 2)
    /// assert_eq!(matches.len(), 5);
    /// assert!(matches.contains(Position::new(2, 2)));
    /// # Ok::<(), matchlace_core::GridError>(())
    /// ```
    #[must_use]
    pub fn find_matches(&self) -> MatchSet {
        let (rows, cols) = (self.rows(), self.cols());
        let mut matches = MatchSet::new(rows, cols);
        for row in 0..rows {
            mark_runs(cols, |i| self[Position::new(row, i)], |i| {
                matches.mark(Position::new(row, i));
            });
        }
        for col in 0..cols {
            mark_runs(rows, |i| self[Position::new(i, col)], |i| {
                matches.mark(Position::new(i, col));
            });
        }
        matches
    }
}

/// Scans one line of `len` cells and reports every index inside a run of at
/// least [`MIN_RUN`] equal filled cells.
fn mark_runs(len: usize, cell_at: impl Fn(usize) -> Cell, mut mark: impl FnMut(usize)) {
    let mut start = 0;
    while start < len {
        let head = cell_at(start);
        let mut end = start + 1;
        while end < len && cell_at(end) == head {
            end += 1;
        }
        if head.is_filled() && end - start >= MIN_RUN {
            (start..end).for_each(&mut mark);
        }
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Symbol;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_symbol_grid_matches_everything() {
        let grid = Grid::filled(3, 3, Symbol::A);
        let matches = grid.find_matches();
        assert_eq!(matches.len(), 9);
        assert_eq!(matches.iter().count(), 9);
    }

    #[test]
    fn test_runs_of_two_are_ignored() {
        let grid = grid(
            "
            A A B B
            B B A A
            A A B B
            ",
        );
        assert!(grid.find_matches().is_empty());
    }

    #[test]
    fn test_run_extends_to_maximal_length() {
        let grid = grid(
            "
            B A A A A C
            A B C B C B
            ",
        );
        let matches = grid.find_matches();
        let found: Vec<_> = matches.iter().collect();
        assert_eq!(
            found,
            (1..=4).map(|col| Position::new(0, col)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_vertical_run() {
        let grid = grid(
            "
            A B
            C B
            A B
            C A
            ",
        );
        let matches = grid.find_matches();
        assert_eq!(matches.len(), 3);
        assert!((0..3).all(|row| matches.contains(Position::new(row, 1))));
        assert!(!matches.contains(Position::new(3, 1)));
    }

    #[test]
    fn test_crossing_runs_count_shared_cell_once() {
        let grid = grid(
            "
            C A C
            A A A
            C A C
            ",
        );
        let matches = grid.find_matches();
        assert_eq!(matches.len(), 5);
        assert!(matches.contains(Position::new(1, 1)));
    }

    #[test]
    fn test_vacant_cells_never_match() {
        let grid = grid(
            "
            . . . A
            B . C A
            C . B A
            ",
        );
        let matches = grid.find_matches();
        assert_eq!(matches.len(), 3);
        assert!(!matches.contains(Position::new(0, 0)));
        assert!(matches.contains(Position::new(2, 3)));
    }

    #[test]
    fn test_contains_out_of_bounds_is_false() {
        let matches = Grid::filled(3, 3, Symbol::A).find_matches();
        assert!(!matches.contains(Position::new(0, 3)));
        assert!(!matches.contains(Position::new(3, 0)));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..=6, 1usize..=6, 1usize..=4).prop_flat_map(|(rows, cols, symbols)| {
            prop::collection::vec(0..symbols, rows * cols).prop_map(move |indices| {
                let text = indices
                    .chunks(cols)
                    .map(|row| {
                        row.iter()
                            .map(|&i| Symbol::from_index(i).unwrap().to_string())
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                text.parse::<Grid>().unwrap()
            })
        })
    }

    /// Length of the longest same-symbol run through `pos` along either axis.
    fn longest_run_through(grid: &Grid, pos: Position) -> usize {
        let cell = grid[pos];
        let run = |dr: isize, dc: isize| {
            let mut n = 0;
            let mut r = isize::try_from(pos.row).unwrap();
            let mut c = isize::try_from(pos.col).unwrap();
            loop {
                r += dr;
                c += dc;
                let Ok(row) = usize::try_from(r) else { break };
                let Ok(col) = usize::try_from(c) else { break };
                if grid.get(Position::new(row, col)) != Some(cell) {
                    break;
                }
                n += 1;
            }
            n
        };
        (1 + run(0, -1) + run(0, 1)).max(1 + run(-1, 0) + run(1, 0))
    }

    proptest! {
        #[test]
        fn prop_matched_cells_lie_in_runs_of_three(grid in arb_grid()) {
            let matches = grid.find_matches();
            for pos in grid.positions() {
                let in_run = longest_run_through(&grid, pos) >= MIN_RUN;
                prop_assert_eq!(matches.contains(pos), in_run, "at {}", pos);
            }
        }

        #[test]
        fn prop_find_matches_does_not_mutate(grid in arb_grid()) {
            let before = grid.clone();
            let _ = grid.find_matches();
            prop_assert_eq!(grid, before);
        }
    }
}
