//! Sources of refill symbols.

use matchlace_core::{Alphabet, Symbol};
use rand::{
    SeedableRng as _,
    distr::{Distribution as _, Uniform},
};
use rand_pcg::Pcg64;

/// A stream of symbols used to refill cleared cells.
///
/// Every refill in every cascade draws from the source in a fixed order, so the
/// sequence a source produces is part of the observable result of a solve.
pub trait SymbolSource {
    /// Draws the next symbol from `alphabet`.
    fn next_symbol(&mut self, alphabet: Alphabet) -> Symbol;
}

impl<S> SymbolSource for &mut S
where
    S: SymbolSource + ?Sized,
{
    fn next_symbol(&mut self, alphabet: Alphabet) -> Symbol {
        (**self).next_symbol(alphabet)
    }
}

/// A seeded pseudo-random symbol source.
///
/// Two sources created from the same seed produce the same symbols for the
/// same sequence of draws.
///
/// # Examples
///
/// ```
/// use matchlace_core::Alphabet;
/// use matchlace_solver::{RandomSource, SymbolSource};
///
/// let alphabet = Alphabet::new(4).unwrap();
/// let mut a = RandomSource::from_seed(7);
/// let mut b = RandomSource::from_seed(7);
/// for _ in 0..16 {
///     assert_eq!(a.next_symbol(alphabet), b.next_symbol(alphabet));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: Pcg64,
}

impl RandomSource {
    /// Creates a source from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Returns the seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SymbolSource for RandomSource {
    fn next_symbol(&mut self, alphabet: Alphabet) -> Symbol {
        // alphabets are never empty, so the range is always valid
        let index = Uniform::new(0, alphabet.len()).map_or(0, |range| range.sample(&mut self.rng));
        alphabet.symbol(index)
    }
}
