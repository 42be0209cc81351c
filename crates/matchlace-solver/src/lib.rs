//! Greedy play simulation for match-3 grids.
//!
//! The solver is built in layers over [`matchlace_core`]:
//!
//! - [`source`]: the [`SymbolSource`] seam and the seeded [`RandomSource`]
//!   that supplies refill symbols
//! - [`cascade`]: clear matched cells, apply gravity and refill, repeated up
//!   to a cascade cap
//! - [`moves`]: adjacent swaps and their canonical enumeration order
//! - [`GreedySolver`]: best-move search over every swap, and the driving loop
//!   that plays best moves until the move budget runs out or no swap helps
//!
//! # Determinism
//!
//! A single symbol source is threaded by reference through every refill,
//! including the refills of candidate moves that are evaluated and then
//! discarded. Results are therefore reproducible for a given source state and
//! input, and change if candidates are evaluated in a different order.
//!
//! # Examples
//!
//! ```
//! use matchlace_core::{Alphabet, Grid};
//! use matchlace_solver::{GreedySolver, RandomSource};
//!
//! let alphabet = Alphabet::new(3)?;
//! let grid = Grid::parse(
//!     "A B C A B
//!      B A B C A
//!      C B A B C
//!      A C B A B
//!      B A C B A",
//!     5,
//!     5,
//!     alphabet,
//! )?;
//! let mut source = RandomSource::from_seed(42);
//! let report = GreedySolver::default().solve(&grid, 18, alphabet, &mut source);
//! println!(
//!     "{} moves cleared {} cells (efficiency {:.3})",
//!     report.steps_used, report.total_cleared, report.efficiency
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    greedy_solver::{AppliedMove, BestMove, DEFAULT_MAX_CASCADES, GreedySolver, SolveReport},
    moves::Move,
    source::{RandomSource, SymbolSource},
};

pub mod cascade;
mod greedy_solver;
pub mod moves;
pub mod source;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
