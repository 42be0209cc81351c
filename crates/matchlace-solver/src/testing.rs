//! Deterministic symbol sources for tests.
//!
//! [`RandomSource`](crate::RandomSource) is the source used in production, but
//! its exact output belongs to the `rand` implementation. The sources here
//! have fully specified sequences, so solve results against them can be pinned
//! as fixtures.

use matchlace_core::{Alphabet, Symbol};
#[cfg(test)]
use matchlace_core::Grid;
#[cfg(test)]
use proptest::prelude::*;

use crate::SymbolSource;

/// The 5x5, three-symbol sample level shipped with the analyzer.
pub const SAMPLE_GRID: &str = "
    A B C A B
    B A B C A
    C B A B C
    A C B A B
    B A C B A
";

/// A source that walks the alphabet in order: `A`, `B`, `C`, `A`, ...
#[derive(Debug, Default, Clone)]
pub struct CycleSource {
    draws: usize,
}

impl CycleSource {
    /// Creates a source starting at `A`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of symbols drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl SymbolSource for CycleSource {
    fn next_symbol(&mut self, alphabet: Alphabet) -> Symbol {
        let symbol = alphabet.symbol(self.draws);
        self.draws += 1;
        symbol
    }
}

/// A 32-bit xorshift (13, 17, 5) source; each draw picks
/// `alphabet[state % alphabet.len()]` after advancing the state.
#[derive(Debug, Clone)]
pub struct XorShiftSource {
    state: u32,
    draws: usize,
}

impl XorShiftSource {
    /// Creates a source from a non-zero seed.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is zero, which would make the sequence constant.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        assert_ne!(seed, 0, "xorshift seed must be non-zero");
        Self {
            state: seed,
            draws: 0,
        }
    }

    /// Returns the number of symbols drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl SymbolSource for XorShiftSource {
    fn next_symbol(&mut self, alphabet: Alphabet) -> Symbol {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.draws += 1;
        alphabet.symbol(x as usize % alphabet.len())
    }
}

/// Generates a small grid together with an alphabet covering its symbols.
#[cfg(test)]
pub(crate) fn arb_level() -> impl Strategy<Value = (Grid, Alphabet)> {
    (1usize..=6, 1usize..=6, 1usize..=4).prop_flat_map(|(rows, cols, symbols)| {
        prop::collection::vec(0..symbols, rows * cols).prop_map(move |indices| {
            let mut grid = Grid::filled(rows, cols, Symbol::A);
            for (pos, index) in grid.positions().zip(indices) {
                grid[pos] = Symbol::from_index(index).unwrap_or(Symbol::A).into();
            }
            (grid, Alphabet::new(symbols).unwrap())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_source_walks_alphabet() {
        let alphabet = Alphabet::new(3).unwrap();
        let mut source = CycleSource::new();
        let letters: String = (0..7)
            .map(|_| source.next_symbol(alphabet).as_char())
            .collect();
        assert_eq!(letters, "ABCABCA");
        assert_eq!(source.draws(), 7);
    }

    #[test]
    fn test_xorshift_sequence_is_pinned() {
        let alphabet = Alphabet::new(5).unwrap();
        let mut source = XorShiftSource::new(42);
        let letters: String = (0..8)
            .map(|_| source.next_symbol(alphabet).as_char())
            .collect();
        assert_eq!(letters, "CDEBBEAE");
    }
}
