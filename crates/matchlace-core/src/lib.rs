//! Core data structures for match-3 level analysis.
//!
//! This crate provides the grid model shared by the solver and the analyzer:
//!
//! - [`symbol`]: tile [`Symbol`]s and the per-level [`Alphabet`]
//! - [`position`]: cell coordinates
//! - [`grid`]: the [`Grid`] buffer, its explicit [`Cell`] states and the grid
//!   text format
//! - [`matches`]: match detection producing a [`MatchSet`]
//!
//! # Examples
//!
//! ```
//! use matchlace_core::{Alphabet, Grid};
//!
//! let alphabet = Alphabet::new(3)?;
//! let grid = Grid::parse("A A A\nB C B\nC B C", 3, 3, alphabet)?;
//! assert_eq!(grid.find_matches().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod grid;
pub mod matches;
pub mod position;
pub mod symbol;

pub use self::{
    grid::{Cell, Grid, GridError},
    matches::{MIN_RUN, MatchSet},
    position::Position,
    symbol::{Alphabet, AlphabetError, Symbol},
};
