//! Batch analysis of many levels.

use matchlace_solver::{GreedySolver, RandomSource, SymbolSource};

use crate::{
    AnalyzerConfig, BatchError, FailurePolicy, LevelError, LevelInput, LevelRecord, ResultRecord,
};

/// Analyzes a table of levels with one shared random stream.
///
/// Levels are simulated in input order, all drawing from the same source,
/// so the refills of a level depend on every level before it. Reordering the
/// input changes the results.
///
/// # Examples
///
/// ```
/// use matchlace_analyzer::{AnalyzerConfig, BatchRunner, LevelInput};
///
/// let levels = [LevelInput {
///     level_id: "1".to_owned(),
///     grid_rows: "3".to_owned(),
///     grid_cols: "3".to_owned(),
///     grid: "A B C\nB C A\nC A B".to_owned(),
///     ..LevelInput::default()
/// }];
/// let results = BatchRunner::new(AnalyzerConfig::default()).run(&levels)?;
/// assert_eq!(results[0].steps_used, 0);
/// assert_eq!(results[0].difficulty, Some(7.5));
/// # Ok::<(), matchlace_analyzer::BatchError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct BatchRunner {
    config: AnalyzerConfig,
}

impl BatchRunner {
    /// Creates a runner with the given settings.
    #[must_use]
    pub const fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the runner settings.
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes every level with a [`RandomSource`] seeded from the config.
    ///
    /// Results are sorted by level id, see [`sort_by_level_id`].
    ///
    /// # Errors
    ///
    /// With [`FailurePolicy::Abort`], returns a [`BatchError`] for the first
    /// level that fails. With [`FailurePolicy::Isolate`] this never fails.
    pub fn run(&self, levels: &[LevelInput]) -> Result<Vec<ResultRecord>, BatchError> {
        let mut source = RandomSource::from_seed(self.config.seed);
        log::debug!("refill stream seeded with {}", source.seed());
        self.run_with_source(levels, &mut source)
    }

    /// Analyzes every level, drawing refills from `source`.
    ///
    /// A failing level never consumes randomness.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_with_source<S>(
        &self,
        levels: &[LevelInput],
        source: &mut S,
    ) -> Result<Vec<ResultRecord>, BatchError>
    where
        S: SymbolSource + ?Sized,
    {
        let solver = GreedySolver::new(self.config.max_cascades);
        let mut results = Vec::with_capacity(levels.len());
        for (index, input) in levels.iter().enumerate() {
            let record = match LevelRecord::parse(input) {
                Ok(level) => match simulate(solver, &level, source) {
                    Ok(record) => record,
                    Err(error) => self.on_failure(index, input, Some(&level), error)?,
                },
                Err(error) => self.on_failure(index, input, None, error)?,
            };
            results.push(record);
        }
        sort_by_level_id(&mut results);
        Ok(results)
    }

    fn on_failure(
        &self,
        index: usize,
        input: &LevelInput,
        level: Option<&LevelRecord>,
        error: LevelError,
    ) -> Result<ResultRecord, BatchError> {
        let level_id = input.level_id.trim();
        match self.config.failure_policy {
            FailurePolicy::Abort => Err(BatchError {
                index,
                level_id: level_id.to_owned(),
                source: error,
            }),
            FailurePolicy::Isolate => {
                log::warn!("level {level_id:?} (record {index}) skipped: {error}");
                Ok(ResultRecord::failed(level_id, level, &error))
            }
        }
    }
}

/// Plays and scores one parsed level.
fn simulate<S>(
    solver: GreedySolver,
    level: &LevelRecord,
    source: &mut S,
) -> Result<ResultRecord, LevelError>
where
    S: SymbolSource + ?Sized,
{
    let report = level
        .grid()?
        .map(|(grid, alphabet)| solver.solve(&grid, level.move_limit, alphabet, source));
    let record = ResultRecord::analyzed(level, report.as_ref());

    let difficulty = record.difficulty.unwrap_or_default();
    if let Some(report) = &report {
        let stalled = if report.stalled(level.move_limit) { " (stalled)" } else { "" };
        log::info!(
            "level {}: {} steps{stalled}, {} cleared, efficiency {:.3}, difficulty {:.2}",
            record.level_id,
            report.steps_used,
            report.total_cleared,
            report.efficiency,
            difficulty
        );
    } else {
        log::info!("level {}: no grid, difficulty {difficulty:.2}", record.level_id);
    }
    Ok(record)
}

/// Sorts results by numeric level id.
///
/// Ids that parse as integers come first in ascending order; the rest follow
/// in their original relative order.
pub fn sort_by_level_id(results: &mut [ResultRecord]) {
    results.sort_by_key(|record| {
        let id = record.level_id.parse::<i64>().ok();
        (id.is_none(), id)
    });
}
