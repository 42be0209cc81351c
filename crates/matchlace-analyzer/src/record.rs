//! Level input and result records.
//!
//! [`LevelInput`] holds one row of the level table exactly as read, every
//! field a string. [`LevelRecord::parse`] turns it into typed metadata, and
//! [`ResultRecord`] is the row written back out after analysis.

use matchlace_core::{Alphabet, Grid};
use matchlace_solver::SolveReport;
use serde::{Deserialize, Serialize, Serializer};

use crate::{LevelError, difficulty};

/// Move budget used when `MoveLimit` is blank.
pub const DEFAULT_MOVE_LIMIT: usize = 10;
/// Number of block types used when `BlockTypes` is blank.
pub const DEFAULT_BLOCK_TYPES: usize = 3;

/// One raw row of the level table.
///
/// Missing columns deserialize as empty strings and unknown columns such as
/// `Objectives` or `Notes` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LevelInput {
    /// Level identifier, ideally an integer.
    #[serde(rename = "LevelID")]
    pub level_id: String,
    /// Declared number of grid rows.
    #[serde(rename = "GridRows")]
    pub grid_rows: String,
    /// Declared number of grid columns.
    #[serde(rename = "GridCols")]
    pub grid_cols: String,
    /// Grid text: one line per row, whitespace between cells.
    #[serde(rename = "Grid")]
    pub grid: String,
    /// Move budget.
    #[serde(rename = "MoveLimit")]
    pub move_limit: String,
    /// Number of distinct symbols.
    #[serde(rename = "BlockTypes")]
    pub block_types: String,
    /// Number of traps.
    #[serde(rename = "Traps")]
    pub traps: String,
}

/// Typed level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    /// Trimmed level identifier.
    pub level_id: String,
    /// Declared number of grid rows.
    pub rows: usize,
    /// Declared number of grid columns.
    pub cols: usize,
    /// Trimmed grid text, `None` if the level has no grid.
    pub grid_text: Option<String>,
    /// Move budget for the solver.
    pub move_limit: usize,
    /// Number of distinct symbols.
    pub block_types: usize,
    /// Number of traps.
    pub traps: usize,
}

impl LevelRecord {
    /// Parses the metadata of a raw row.
    ///
    /// Every field is trimmed. A blank numeric field takes its default:
    /// `0` for `GridRows`, `GridCols` and `Traps`, [`DEFAULT_MOVE_LIMIT`] and
    /// [`DEFAULT_BLOCK_TYPES`] for the others. The grid text itself is not
    /// parsed here, see [`LevelRecord::grid`].
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::MalformedNumericField`] if a numeric field is
    /// present but is not a non-negative integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use matchlace_analyzer::{LevelInput, LevelRecord};
    ///
    /// let input = LevelInput {
    ///     level_id: " 4 ".to_owned(),
    ///     move_limit: "12".to_owned(),
    ///     ..LevelInput::default()
    /// };
    /// let level = LevelRecord::parse(&input)?;
    /// assert_eq!(level.level_id, "4");
    /// assert_eq!(level.move_limit, 12);
    /// assert_eq!(level.block_types, 3);
    /// assert_eq!(level.grid_text, None);
    /// # Ok::<(), matchlace_analyzer::LevelError>(())
    /// ```
    pub fn parse(input: &LevelInput) -> Result<Self, LevelError> {
        let grid_text = input.grid.trim();
        Ok(Self {
            level_id: input.level_id.trim().to_owned(),
            rows: parse_count("GridRows", &input.grid_rows, 0)?,
            cols: parse_count("GridCols", &input.grid_cols, 0)?,
            grid_text: (!grid_text.is_empty()).then(|| grid_text.to_owned()),
            move_limit: parse_count("MoveLimit", &input.move_limit, DEFAULT_MOVE_LIMIT)?,
            block_types: parse_count("BlockTypes", &input.block_types, DEFAULT_BLOCK_TYPES)?,
            traps: parse_count("Traps", &input.traps, 0)?,
        })
    }

    /// Returns the level alphabet, the first `max(1, block_types)` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::UnsupportedBlockTypes`] if `block_types` exceeds
    /// the size of the symbol set.
    pub fn alphabet(&self) -> Result<Alphabet, LevelError> {
        Alphabet::new(self.block_types.max(1)).map_err(|_| {
            LevelError::UnsupportedBlockTypes {
                block_types: self.block_types,
            }
        })
    }

    /// Parses the grid text against the declared size and the level
    /// alphabet.
    ///
    /// Returns `Ok(None)` for a level without grid text.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::UnsupportedBlockTypes`] as
    /// [`alphabet`](Self::alphabet) does, and [`LevelError::Grid`] if the
    /// text does not match the declared size or uses a symbol outside the
    /// alphabet.
    pub fn grid(&self) -> Result<Option<(Grid, Alphabet)>, LevelError> {
        let alphabet = self.alphabet()?;
        let Some(text) = &self.grid_text else {
            return Ok(None);
        };
        let grid = Grid::parse(text, self.rows, self.cols, alphabet)?;
        Ok(Some((grid, alphabet)))
    }
}

fn parse_count(field: &'static str, value: &str, default: usize) -> Result<usize, LevelError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }
    value.parse().map_err(|_| LevelError::MalformedNumericField {
        field,
        value: value.to_owned(),
    })
}

/// One row of analysis output.
///
/// Serializes with the column names `LevelID`, `Rows`, `Cols`, `MoveLimit`,
/// `BlockTypes`, `Traps`, `Efficiency` (3 decimals), `StepsUsed`,
/// `TotalCleared`, `DifficultyScore` (2 decimals) and `Error`. A failed
/// level leaves `Efficiency` and `DifficultyScore` blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Trimmed level identifier.
    #[serde(rename = "LevelID")]
    pub level_id: String,
    /// Declared number of grid rows.
    #[serde(rename = "Rows")]
    pub rows: usize,
    /// Declared number of grid columns.
    #[serde(rename = "Cols")]
    pub cols: usize,
    /// Move budget.
    #[serde(rename = "MoveLimit")]
    pub move_limit: usize,
    /// Number of distinct symbols.
    #[serde(rename = "BlockTypes")]
    pub block_types: usize,
    /// Number of traps.
    #[serde(rename = "Traps")]
    pub traps: usize,
    /// Cells cleared per grid cell; not clamped, so it can exceed `1.0`.
    /// `None` for a failed level.
    #[serde(rename = "Efficiency", serialize_with = "serialize_3dp")]
    pub efficiency: Option<f64>,
    /// Number of moves the solver played.
    #[serde(rename = "StepsUsed")]
    pub steps_used: usize,
    /// Cells cleared over all moves.
    #[serde(rename = "TotalCleared")]
    pub total_cleared: usize,
    /// Difficulty score, already rounded to 2 decimals. `None` for a failed
    /// level.
    #[serde(rename = "DifficultyScore", serialize_with = "serialize_2dp")]
    pub difficulty: Option<f64>,
    /// Why the level failed, `None` for an analyzed level.
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl ResultRecord {
    /// Builds the result for an analyzed level.
    ///
    /// `report` is `None` for a level without a grid: efficiency, steps and
    /// cleared cells are then zero and the score comes from the metadata
    /// alone.
    #[must_use]
    pub fn analyzed(level: &LevelRecord, report: Option<&SolveReport>) -> Self {
        let (efficiency, steps_used, total_cleared) = report.map_or((0.0, 0, 0), |report| {
            (report.efficiency, report.steps_used, report.total_cleared)
        });
        Self {
            level_id: level.level_id.clone(),
            rows: level.rows,
            cols: level.cols,
            move_limit: level.move_limit,
            block_types: level.block_types,
            traps: level.traps,
            efficiency: Some(efficiency),
            steps_used,
            total_cleared,
            difficulty: Some(difficulty::score(
                level.block_types,
                level.traps,
                level.move_limit,
                efficiency,
            )),
            error: None,
        }
    }

    /// Builds the placeholder result for a level that failed.
    ///
    /// Metadata is copied from `level` when it parsed and left at zero
    /// otherwise. Steps and cleared cells are zero; efficiency and the score
    /// are `None`.
    #[must_use]
    pub fn failed(level_id: &str, level: Option<&LevelRecord>, error: &LevelError) -> Self {
        let mut record = Self {
            level_id: level_id.trim().to_owned(),
            rows: 0,
            cols: 0,
            move_limit: 0,
            block_types: 0,
            traps: 0,
            efficiency: None,
            steps_used: 0,
            total_cleared: 0,
            difficulty: None,
            error: Some(error.to_string()),
        };
        if let Some(level) = level {
            record.rows = level.rows;
            record.cols = level.cols;
            record.move_limit = level.move_limit;
            record.block_types = level.block_types;
            record.traps = level.traps;
        }
        record
    }

    /// Returns `true` if the level failed to analyze.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[allow(clippy::ref_option)]
fn serialize_3dp<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_fixed(*value, 3, serializer)
}

#[allow(clippy::ref_option)]
fn serialize_2dp<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_fixed(*value, 2, serializer)
}

fn serialize_fixed<S>(value: Option<f64>, decimals: usize, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.collect_str(&format_args!("{value:.decimals$}")),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use matchlace_core::GridError;

    use super::*;

    fn input(level_id: &str, rows: &str, cols: &str, grid: &str) -> LevelInput {
        LevelInput {
            level_id: level_id.to_owned(),
            grid_rows: rows.to_owned(),
            grid_cols: cols.to_owned(),
            grid: grid.to_owned(),
            ..LevelInput::default()
        }
    }

    #[test]
    fn test_parse_trims_and_applies_defaults() {
        let raw = input(" 1 ", " 2", "3 ", "\n  A B C\n  C B A\n");
        let level = LevelRecord::parse(&raw).unwrap();
        assert_eq!(level.level_id, "1");
        assert_eq!((level.rows, level.cols), (2, 3));
        assert_eq!(level.grid_text.as_deref(), Some("A B C\n  C B A"));
        assert_eq!(level.move_limit, DEFAULT_MOVE_LIMIT);
        assert_eq!(level.block_types, DEFAULT_BLOCK_TYPES);
        assert_eq!(level.traps, 0);
    }

    #[test]
    fn test_parse_keeps_explicit_zero() {
        let level = LevelRecord::parse(&LevelInput {
            move_limit: "0".to_owned(),
            block_types: "0".to_owned(),
            ..LevelInput::default()
        })
        .unwrap();
        assert_eq!(level.move_limit, 0);
        assert_eq!(level.block_types, 0);
        // a zero block type count still yields a one-symbol alphabet
        assert_eq!(level.alphabet().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_numbers() {
        for (field, value) in [("GridRows", "five"), ("MoveLimit", "-3"), ("Traps", "1.5")] {
            let mut raw = input("1", "", "", "");
            match field {
                "GridRows" => raw.grid_rows = value.to_owned(),
                "MoveLimit" => raw.move_limit = value.to_owned(),
                _ => raw.traps = value.to_owned(),
            }
            assert_eq!(
                LevelRecord::parse(&raw),
                Err(LevelError::MalformedNumericField {
                    field,
                    value: value.to_owned()
                })
            );
        }
    }

    #[test]
    fn test_alphabet_rejects_too_many_block_types() {
        let mut level = LevelRecord::parse(&input("1", "", "", "")).unwrap();
        level.block_types = 27;
        assert_eq!(
            level.alphabet(),
            Err(LevelError::UnsupportedBlockTypes { block_types: 27 })
        );
        level.block_types = 26;
        assert_eq!(level.alphabet().unwrap().len(), 26);
    }

    #[test]
    fn test_grid_is_none_without_text() {
        let level = LevelRecord::parse(&input("1", "5", "5", "   ")).unwrap();
        assert_eq!(level.grid(), Ok(None));
    }

    #[test]
    fn test_grid_checks_size_and_symbols() {
        let level = LevelRecord::parse(&input("1", "2", "2", "A B\nB A")).unwrap();
        let (grid, alphabet) = level.grid().unwrap().unwrap();
        assert_eq!(grid.area(), 4);
        assert_eq!(alphabet.len(), 3);

        let level = LevelRecord::parse(&input("1", "3", "2", "A B\nB A")).unwrap();
        assert!(matches!(
            level.grid(),
            Err(LevelError::Grid(GridError::SizeMismatch { .. }))
        ));

        let level = LevelRecord::parse(&input("1", "2", "2", "A B\nB D")).unwrap();
        assert!(matches!(
            level.grid(),
            Err(LevelError::Grid(GridError::InvalidSymbol { row: 1, col: 1, .. }))
        ));
    }

    #[test]
    fn test_analyzed_without_report_scores_metadata() {
        let mut raw = input("9", "4", "4", "");
        raw.move_limit = "20".to_owned();
        raw.block_types = "5".to_owned();
        raw.traps = "1".to_owned();
        let level = LevelRecord::parse(&raw).unwrap();
        let record = ResultRecord::analyzed(&level, None);

        assert_eq!((record.rows, record.cols), (4, 4));
        assert_eq!(record.steps_used, 0);
        assert_eq!(record.total_cleared, 0);
        assert_eq!(record.efficiency, Some(0.0));
        assert!((record.difficulty.unwrap() - 11.5).abs() < 1e-9);
        assert!(!record.is_failed());
    }

    #[test]
    fn test_failed_keeps_parsed_metadata() {
        let level = LevelRecord::parse(&input("3", "2", "2", "A B\nB D")).unwrap();
        let error = level.grid().unwrap_err();
        let record = ResultRecord::failed(&level.level_id, Some(&level), &error);

        assert_eq!(record.level_id, "3");
        assert_eq!((record.rows, record.cols, record.block_types), (2, 2, 3));
        assert_eq!((record.efficiency, record.difficulty), (None, None));
        assert_eq!(record.error.as_deref(), Some(error.to_string().as_str()));

        let record = ResultRecord::failed(" 4 ", None, &error);
        assert_eq!(record.level_id, "4");
        assert_eq!((record.rows, record.move_limit, record.block_types), (0, 0, 0));
        assert!(record.is_failed());
    }
}
