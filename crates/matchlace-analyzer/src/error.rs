//! Error types for level analysis.

use matchlace_core::{GridError, Symbol};

/// Why a single level could not be analyzed.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum LevelError {
    /// The grid text does not fit the declared size or uses a symbol outside
    /// the level alphabet.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
    /// A numeric field is present but is not a non-negative integer.
    #[display("malformed numeric field {field}: {value:?}")]
    MalformedNumericField {
        /// Column name of the field.
        field: &'static str,
        /// The raw, trimmed field value.
        value: String,
    },
    /// `BlockTypes` asks for more symbols than the symbol set has.
    #[display(
        "unsupported BlockTypes {block_types}: at most {} symbol types are available",
        Symbol::COUNT
    )]
    UnsupportedBlockTypes {
        /// The requested number of block types.
        block_types: usize,
    },
}

/// A batch stopped at a failing level.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("level {level_id:?} (record {index}): {source}")]
pub struct BatchError {
    /// Zero-based position of the level in the input.
    pub index: usize,
    /// The trimmed `LevelID` of the failing level.
    pub level_id: String,
    /// What went wrong.
    pub source: LevelError,
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_grid_error_converts() {
        let err = LevelError::from(GridError::SizeMismatch {
            expected_rows: 2,
            expected_cols: 2,
            found_rows: 1,
            found_cols: 2,
        });
        assert!(err.is_grid());
        assert!(err.to_string().starts_with("invalid grid: grid size mismatch"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_batch_error_names_level_and_field() {
        let err = BatchError {
            index: 3,
            level_id: "7".to_owned(),
            source: LevelError::MalformedNumericField {
                field: "MoveLimit",
                value: "ten".to_owned(),
            },
        };
        assert_eq!(
            err.to_string(),
            "level \"7\" (record 3): malformed numeric field MoveLimit: \"ten\""
        );
        assert!(err.source().is_some());
    }
}
