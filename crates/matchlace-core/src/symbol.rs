//! Tile symbols and level alphabets.

use std::fmt::{self, Display};

/// A tile symbol, one of the ordered letters `A`-`Z`.
///
/// Symbols are stored by their position in the fixed symbol set, so
/// `Symbol::A` has index 0 and `Symbol::Z` has index 25.
///
/// # Examples
///
/// ```
/// use matchlace_core::Symbol;
///
/// let symbol = Symbol::from_char('C').unwrap();
/// assert_eq!(symbol.index(), 2);
/// assert_eq!(symbol.to_string(), "C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Number of symbols in the fixed symbol set.
    pub const COUNT: usize = 26;

    /// The first symbol, `A`.
    pub const A: Self = Self(0);

    /// Creates a symbol from its index in the symbol set.
    ///
    /// Returns `None` if `index` is not less than [`Symbol::COUNT`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| usize::from(i) < Self::COUNT)
            .map(Self)
    }

    /// Creates a symbol from an uppercase ASCII letter.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c)
            .ok()
            .filter(u8::is_ascii_uppercase)
            .map(|b| Self(b - b'A'))
    }

    /// Parses a grid token, which must consist of exactly one symbol letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use matchlace_core::Symbol;
    ///
    /// assert!(Symbol::parse_token("B").is_some());
    /// assert!(Symbol::parse_token("BB").is_none());
    /// assert!(Symbol::parse_token("b").is_none());
    /// ```
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Returns the index of this symbol in the symbol set.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the letter for this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Errors returned when building an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AlphabetError {
    /// The requested alphabet has no symbols.
    #[display("alphabet must contain at least one symbol")]
    Empty,
    /// The requested alphabet is larger than the symbol set.
    #[display("alphabet of {size} symbols exceeds the {} available", Symbol::COUNT)]
    TooLarge {
        /// Requested number of symbols.
        size: usize,
    },
}

/// The symbols usable in one level: the first `len` letters of the symbol set.
///
/// An alphabet is never empty.
///
/// # Examples
///
/// ```
/// use matchlace_core::{Alphabet, Symbol};
///
/// let alphabet = Alphabet::new(3)?;
/// let letters: String = alphabet.iter().map(Symbol::as_char).collect();
/// assert_eq!(letters, "ABC");
/// assert!(!alphabet.contains(Symbol::from_char('D').unwrap()));
/// # Ok::<(), matchlace_core::AlphabetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    len: u8,
}

impl Alphabet {
    /// Creates an alphabet of the first `len` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::Empty`] if `len` is zero and
    /// [`AlphabetError::TooLarge`] if it exceeds [`Symbol::COUNT`].
    pub fn new(len: usize) -> Result<Self, AlphabetError> {
        match len {
            0 => Err(AlphabetError::Empty),
            n if n > Symbol::COUNT => Err(AlphabetError::TooLarge { size: n }),
            #[expect(clippy::cast_possible_truncation)]
            n => Ok(Self { len: n as u8 }),
        }
    }

    /// Returns the number of symbols.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns the symbol at `index`, wrapping around the alphabet length.
    #[must_use]
    pub fn symbol(self, index: usize) -> Symbol {
        #[expect(clippy::cast_possible_truncation)]
        let index = (index % self.len()) as u8;
        Symbol(index)
    }

    /// Returns `true` if `symbol` belongs to this alphabet.
    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        symbol.0 < self.len
    }

    /// Iterates over the symbols in order.
    pub fn iter(self) -> impl Iterator<Item = Symbol> {
        (0..self.len).map(Symbol)
    }
}
