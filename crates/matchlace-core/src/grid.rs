//! The level grid buffer and its text format.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Alphabet, Position, Symbol};

/// The state of one grid cell.
///
/// Grids at rest hold only [`Cell::Filled`] cells. [`Cell::Vacant`] appears
/// transiently while a cascade clears matched tiles and before the column is
/// refilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Cell {
    /// The cell holds a tile.
    Filled(Symbol),
    /// The tile was cleared and has not been replaced yet.
    Vacant,
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Filled(symbol) => Some(symbol),
            Self::Vacant => None,
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Self::Filled(symbol)
    }
}

/// Errors produced while reading grid text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The text does not have the declared number of rows or columns.
    #[display(
        "grid size mismatch: expected {expected_rows}x{expected_cols}, found {found_rows} rows with {found_cols} columns"
    )]
    SizeMismatch {
        /// Declared row count.
        expected_rows: usize,
        /// Declared column count.
        expected_cols: usize,
        /// Number of non-blank rows in the text.
        found_rows: usize,
        /// Column count of the first row that disagrees, or of the first row
        /// when only the row count is wrong.
        found_cols: usize,
    },
    /// A cell token is not a symbol of the level alphabet.
    #[display("invalid symbol '{token}' at ({row}, {col}); allowed: {allowed}")]
    InvalidSymbol {
        /// The offending token.
        token: String,
        /// Row of the token.
        row: usize,
        /// Column of the token.
        col: usize,
        /// The allowed symbols, for the error message.
        allowed: String,
    },
}

/// A rectangular grid of cells stored in row-major order.
///
/// # Examples
///
/// ```
/// use matchlace_core::{Grid, Position};
///
/// let grid: Grid = "
///     A B C
///     C A B
/// "
/// .parse()?;
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
/// assert_eq!(grid[Position::new(1, 0)].symbol().unwrap().as_char(), 'C');
/// # Ok::<(), matchlace_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell holding `symbol`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, symbol: Symbol) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Filled(symbol); rows * cols],
        }
    }

    /// Parses grid text with declared dimensions, checking every symbol
    /// against `alphabet`.
    ///
    /// Blank lines are ignored; cells within a row are separated by whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SizeMismatch`] if the text does not have exactly
    /// `rows` rows of `cols` tokens, and [`GridError::InvalidSymbol`] for the
    /// first token (in row-major order) outside `alphabet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matchlace_core::{Alphabet, Grid, GridError};
    ///
    /// let alphabet = Alphabet::new(2).unwrap();
    /// assert!(Grid::parse("A B\nB A", 2, 2, alphabet).is_ok());
    /// assert!(matches!(
    ///     Grid::parse("A C\nB A", 2, 2, alphabet),
    ///     Err(GridError::InvalidSymbol { row: 0, col: 1, .. })
    /// ));
    /// ```
    pub fn parse(
        text: &str,
        rows: usize,
        cols: usize,
        alphabet: Alphabet,
    ) -> Result<Self, GridError> {
        let lines = tokenize(text);
        let mismatch = |found_cols| GridError::SizeMismatch {
            expected_rows: rows,
            expected_cols: cols,
            found_rows: lines.len(),
            found_cols,
        };
        if let Some(line) = lines.iter().find(|line| line.len() != cols) {
            return Err(mismatch(line.len()));
        }
        if lines.len() != rows {
            return Err(mismatch(lines.first().map_or(0, Vec::len)));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            for (col, token) in line.iter().enumerate() {
                let symbol = Symbol::parse_token(token)
                    .filter(|&symbol| alphabet.contains(symbol))
                    .ok_or_else(|| GridError::InvalidSymbol {
                        token: (*token).to_owned(),
                        row,
                        col,
                        allowed: alphabet_list(alphabet),
                    })?;
                cells.push(Cell::Filled(symbol));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of cells.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the cell at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.area()).map(move |i| Position::new(i / cols, i % cols))
    }

    /// Returns `true` if no cell is vacant.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_filled())
    }

    /// Exchanges the contents of two cells.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (a, b) = (self.index_of(a), self.index_of(b));
        self.cells.swap(a, b);
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    #[track_caller]
    fn index_of(&self, pos: Position) -> usize {
        match self.offset(pos) {
            Some(i) => i,
            None => panic!("position {pos} out of bounds for {}x{} grid", self.rows, self.cols),
        }
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let i = self.index_of(pos);
        &mut self.cells[i]
    }
}

/// Parses grid text, inferring the dimensions from the first row.
///
/// Any letter `A`-`Z` is accepted; vacant cells are written as `.`.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = tokenize(s);
        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::SizeMismatch {
                    expected_rows: rows,
                    expected_cols: cols,
                    found_rows: rows,
                    found_cols: line.len(),
                });
            }
            for (col, token) in line.iter().enumerate() {
                let cell = if *token == "." {
                    Cell::Vacant
                } else {
                    let symbol = Symbol::parse_token(token).ok_or_else(|| GridError::InvalidSymbol {
                        token: (*token).to_owned(),
                        row,
                        col,
                        allowed: "A-Z".to_owned(),
                    })?;
                    Cell::Filled(symbol)
                };
                cells.push(cell);
            }
        }
        Ok(Self { rows, cols, cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Filled(symbol) => write!(f, "{symbol}")?,
                    Cell::Vacant => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

fn alphabet_list(alphabet: Alphabet) -> String {
    alphabet
        .iter()
        .map(|symbol| symbol.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn tokenize(text: &str) -> Vec<Vec<&str>> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| !tokens.is_empty())
        .collect()
}
