//! The difficulty heuristic.
//!
//! ```text
//! score = 1.5 * block_types + 3 * traps - move_limit / 5 + (1 - clamp(efficiency, 0, 1)) * 5
//! ```
//!
//! More symbol types and more traps make a level harder; a larger move
//! budget and a more effective greedy player make it easier. The score is a
//! relative ranking between levels, not an absolute measure.

/// Weight of each block type.
pub const BLOCK_TYPE_WEIGHT: f64 = 1.5;
/// Weight of each trap.
pub const TRAP_WEIGHT: f64 = 3.0;
/// Number of moves that offset one point of difficulty.
pub const MOVES_PER_POINT: f64 = 5.0;
/// Score added for a player that clears nothing.
pub const INEFFICIENCY_WEIGHT: f64 = 5.0;

/// Computes the difficulty score, rounded to 2 decimal places.
///
/// `efficiency` is clamped to `0.0..=1.0` before it is used, so cascades that
/// clear more cells than the grid holds do not push the score any lower.
///
/// # Examples
///
/// ```
/// use matchlace_analyzer::difficulty;
///
/// assert_eq!(difficulty::score(3, 0, 18, 23.44), 0.9);
/// assert_eq!(difficulty::score(5, 1, 20, 0.0), 11.5);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn score(block_types: usize, traps: usize, move_limit: usize, efficiency: f64) -> f64 {
    let efficiency = efficiency.clamp(0.0, 1.0);
    let raw = BLOCK_TYPE_WEIGHT * block_types as f64 + TRAP_WEIGHT * traps as f64
        - move_limit as f64 / MOVES_PER_POINT
        + (1.0 - efficiency) * INEFFICIENCY_WEIGHT;
    (raw * 100.0).round() / 100.0
}
