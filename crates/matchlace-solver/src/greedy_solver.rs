use matchlace_core::{Alphabet, Grid};

use crate::{Move, SymbolSource, cascade};

/// Default cap on clear-and-refill passes per move.
pub const DEFAULT_MAX_CASCADES: usize = 5;

/// The winning candidate of a move search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMove {
    /// The swap that was selected.
    pub mv: Move,
    /// Cells cleared by the swap across all cascade passes.
    pub cleared: usize,
    /// The grid after the swap and its cascades.
    pub grid: Grid,
}

/// One accepted move of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The swap that was played.
    pub mv: Move,
    /// Cells cleared by the swap across all cascade passes.
    pub cleared: usize,
}

/// The outcome of a greedy solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Number of moves played.
    pub steps_used: usize,
    /// Cells cleared over all moves.
    pub total_cleared: usize,
    /// `total_cleared` divided by the grid area, `0.0` for an empty grid.
    ///
    /// Cascades can clear the same cell position many times, so this can
    /// exceed `1.0`.
    pub efficiency: f64,
    /// The grid after the last played move.
    pub final_grid: Grid,
    /// Every played move in order.
    pub history: Vec<AppliedMove>,
}

impl SolveReport {
    /// Returns `true` if the solve stopped before its move budget because no
    /// move cleared anything.
    #[must_use]
    pub fn stalled(&self, move_limit: usize) -> bool {
        self.steps_used < move_limit
    }
}

/// A greedy, non-backtracking player.
///
/// Each step plays the single swap that clears the most cells once its
/// cascades are fully resolved. It does not search for a globally optimal
/// sequence of moves.
///
/// Candidate swaps are scored on scratch copies of the grid, but their refills
/// still draw from the shared symbol source, so evaluating a move consumes
/// randomness whether or not it is played.
///
/// # Examples
///
/// ```
/// use matchlace_core::{Alphabet, Grid};
/// use matchlace_solver::{GreedySolver, RandomSource};
///
/// let alphabet = Alphabet::new(3)?;
/// let grid = Grid::parse("A B A\nB A B\nC C A", 3, 3, alphabet)?;
/// let solver = GreedySolver::default();
/// let mut source = RandomSource::from_seed(42);
///
/// let report = solver.solve(&grid, 4, alphabet, &mut source);
/// assert!(report.steps_used >= 1);
/// assert_eq!(report.history.len(), report.steps_used);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedySolver {
    max_cascades: usize,
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CASCADES)
    }
}

impl GreedySolver {
    /// Creates a solver that resolves at most `max_cascades` passes per move.
    #[must_use]
    pub const fn new(max_cascades: usize) -> Self {
        Self { max_cascades }
    }

    /// Returns the cascade cap.
    #[must_use]
    pub const fn max_cascades(&self) -> usize {
        self.max_cascades
    }

    /// Finds the swap that clears the most cells.
    ///
    /// Candidates are tried in [`Move::candidates`] order and only a strictly
    /// greater clear count replaces the current best, so ties go to the first
    /// candidate found.
    ///
    /// Returns `None` if no swap clears anything; `grid` itself is never
    /// modified.
    pub fn best_move<S>(
        &self,
        grid: &Grid,
        alphabet: Alphabet,
        source: &mut S,
    ) -> Option<BestMove>
    where
        S: SymbolSource + ?Sized,
    {
        let mut best: Option<BestMove> = None;
        let mut scratch = grid.clone();
        for mv in Move::candidates(grid.rows(), grid.cols()) {
            scratch.clone_from(grid);
            mv.apply(&mut scratch);
            let cleared =
                cascade::resolve_cascade(&mut scratch, alphabet, source, self.max_cascades);
            if cleared > best.as_ref().map_or(0, |best| best.cleared) {
                let previous = best.replace(BestMove {
                    mv,
                    cleared,
                    grid: scratch,
                });
                // recycle the losing buffer as the next scratch grid
                scratch = previous.map_or_else(|| grid.clone(), |previous| previous.grid);
            }
        }
        best
    }

    /// Plays up to `move_limit` greedy moves starting from `grid`.
    ///
    /// Stops early when [`best_move`](Self::best_move) finds no beneficial
    /// swap.
    pub fn solve<S>(
        &self,
        grid: &Grid,
        move_limit: usize,
        alphabet: Alphabet,
        source: &mut S,
    ) -> SolveReport
    where
        S: SymbolSource + ?Sized,
    {
        let mut current = grid.clone();
        let mut history = Vec::new();
        let mut total_cleared = 0;
        for step in 1..=move_limit {
            let Some(best) = self.best_move(&current, alphabet, source) else {
                log::debug!("no beneficial move at step {step}");
                break;
            };
            log::debug!("step {step}: swap {} cleared {}", best.mv, best.cleared);
            total_cleared += best.cleared;
            history.push(AppliedMove {
                mv: best.mv,
                cleared: best.cleared,
            });
            current = best.grid;
        }
        SolveReport {
            steps_used: history.len(),
            total_cleared,
            efficiency: efficiency(total_cleared, grid.area()),
            final_grid: current,
            history,
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn efficiency(cleared: usize, area: usize) -> f64 {
    if area == 0 {
        return 0.0;
    }
    cleared as f64 / area as f64
}
