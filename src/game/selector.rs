//! Secret word selection
//!
//! Picks uniformly from the candidate set. The generator is a type parameter so
//! tests (and `--seed`) can make games reproducible.

use crate::core::Word;
use crate::error::{GameError, Result};
use log::debug;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Uniform random picker over a candidate set
pub struct Selector<R: Rng> {
    rng: R,
}

impl<R: Rng> Selector<R> {
    /// Wrap an existing generator
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Choose one candidate uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoCandidates` if `candidates` is empty.
    pub fn choose(&mut self, candidates: &[Word]) -> Result<Word> {
        let word = candidates
            .choose(&mut self.rng)
            .ok_or(GameError::NoCandidates)?;
        debug!("selected secret from {} candidates", candidates.len());
        Ok(word.clone())
    }
}

impl Selector<StdRng> {
    /// Deterministic selector for reproducible games
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for Selector<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::source::candidates_from_text;

    #[test]
    fn empty_candidates_is_an_error() {
        let mut selector = Selector::seeded(7);
        assert!(matches!(
            selector.choose(&[]),
            Err(GameError::NoCandidates)
        ));
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let candidates = candidates_from_text("apple").unwrap();
        let mut selector = Selector::default();
        for _ in 0..10 {
            assert_eq!(selector.choose(&candidates).unwrap().text(), "APPLE");
        }
    }

    #[test]
    fn choice_is_always_a_candidate() {
        let candidates = candidates_from_text("crane slate raise stare arise irate").unwrap();
        let mut selector = Selector::seeded(42);
        for _ in 0..100 {
            let secret = selector.choose(&candidates).unwrap();
            assert!(candidates.contains(&secret));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let candidates = candidates_from_text("crane slate raise stare arise irate").unwrap();
        let mut a = Selector::seeded(1234);
        let mut b = Selector::seeded(1234);
        for _ in 0..20 {
            assert_eq!(
                a.choose(&candidates).unwrap(),
                b.choose(&candidates).unwrap()
            );
        }
    }

    #[test]
    fn every_candidate_is_reachable() {
        let candidates = candidates_from_text("crane slate raise").unwrap();
        let mut selector = Selector::seeded(99);
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..300 {
            seen.insert(selector.choose(&candidates).unwrap());
        }
        assert_eq!(seen.len(), candidates.len());
    }
}
