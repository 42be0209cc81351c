//! Batch configuration.

use matchlace_solver::DEFAULT_MAX_CASCADES;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// What a batch does when a level fails to parse or validate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FailurePolicy {
    /// Record the failure in the level's result and continue with the next
    /// level.
    #[default]
    Isolate,
    /// Stop the batch at the first failing level.
    Abort,
}

/// Settings for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Seed of the random stream shared by every level in the batch.
    pub seed: u64,
    /// Cap on clear-and-refill passes per move.
    pub max_cascades: usize,
    /// Handling of failing levels.
    pub failure_policy: FailurePolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_cascades: DEFAULT_MAX_CASCADES,
            failure_policy: FailurePolicy::default(),
        }
    }
}
