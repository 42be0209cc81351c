//! Cascade resolution: clear matches, apply gravity, refill.

use matchlace_core::{Alphabet, Cell, Grid, Position};

use crate::SymbolSource;

/// Runs a single clear-and-refill pass.
///
/// Matched cells are vacated, every column is compacted downward keeping the
/// relative order of its remaining tiles, and the vacated top cells are
/// refilled from `source`: column by column from the left, top to bottom
/// within a column, one draw per cell.
///
/// Returns the number of cells cleared. A return value of `0` means the grid
/// had no match and was left unchanged.
///
/// # Examples
///
/// ```
/// use matchlace_core::{Alphabet, Grid};
/// use matchlace_solver::{RandomSource, cascade};
///
/// let alphabet = Alphabet::new(3)?;
/// let mut grid = Grid::parse("B C A\nA A A\nC B C", 3, 3, alphabet)?;
/// let mut source = RandomSource::from_seed(1);
///
/// assert_eq!(cascade::resolve_once(&mut grid, alphabet, &mut source), 3);
/// assert!(grid.is_settled());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve_once<S>(grid: &mut Grid, alphabet: Alphabet, source: &mut S) -> usize
where
    S: SymbolSource + ?Sized,
{
    let matches = grid.find_matches();
    if matches.is_empty() {
        return 0;
    }
    for pos in matches.iter() {
        grid[pos] = Cell::Vacant;
    }
    for col in 0..grid.cols() {
        settle_column(grid, col, alphabet, source);
    }
    matches.len()
}

/// Runs clear-and-refill passes until the grid is stable or `max_cascades`
/// passes have run, and returns the total number of cells cleared.
///
/// The cap bounds the work when refills keep creating matches, which is
/// always the case with a single-symbol alphabet.
pub fn resolve_cascade<S>(
    grid: &mut Grid,
    alphabet: Alphabet,
    source: &mut S,
    max_cascades: usize,
) -> usize
where
    S: SymbolSource + ?Sized,
{
    let mut total = 0;
    for _ in 0..max_cascades {
        let cleared = resolve_once(grid, alphabet, source);
        if cleared == 0 {
            break;
        }
        total += cleared;
    }
    total
}

fn settle_column<S>(grid: &mut Grid, col: usize, alphabet: Alphabet, source: &mut S)
where
    S: SymbolSource + ?Sized,
{
    let mut write = grid.rows();
    for row in (0..grid.rows()).rev() {
        let cell = grid[Position::new(row, col)];
        if cell.is_filled() {
            write -= 1;
            grid[Position::new(write, col)] = cell;
        }
    }
    for row in 0..write {
        grid[Position::new(row, col)] = Cell::Filled(source.next_symbol(alphabet));
    }
}
