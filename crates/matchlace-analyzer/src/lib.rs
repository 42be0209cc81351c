//! Difficulty analysis for batches of match-3 levels.
//!
//! Each level row is parsed into a [`LevelRecord`], its grid is played by a
//! [`GreedySolver`](matchlace_solver::GreedySolver), and the solver's
//! efficiency is combined with the level metadata into a
//! [`difficulty::score`]. [`BatchRunner`] drives a whole table of levels
//! through one seeded random stream and returns the [`ResultRecord`]s sorted
//! by level id.
//!
//! Levels that fail to parse are either recorded with an error message and
//! skipped or stop the batch, depending on the [`FailurePolicy`].

pub use self::{
    batch::{BatchRunner, sort_by_level_id},
    config::{AnalyzerConfig, DEFAULT_SEED, FailurePolicy},
    error::{BatchError, LevelError},
    record::{DEFAULT_BLOCK_TYPES, DEFAULT_MOVE_LIMIT, LevelInput, LevelRecord, ResultRecord},
};

mod batch;
mod config;
pub mod difficulty;
mod error;
mod record;
