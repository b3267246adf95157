//! Sources of win/loss outcomes for simulated trades.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Trait for drawing trade outcomes.
pub trait OutcomeSource {
    /// Returns true if the next trade wins, given the hit rate.
    fn next_is_win(&mut self, hit_rate: f64) -> bool;
}

/// Bernoulli outcomes drawn from a random number generator.
///
/// Each trade consumes exactly one uniform draw in [0, 1) and wins when the
/// draw is below the hit rate.
#[derive(Debug, Clone)]
pub struct BernoulliOutcomes<R> {
    rng: R,
}

impl<R: Rng> BernoulliOutcomes<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the underlying generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl BernoulliOutcomes<ChaCha8Rng> {
    /// Creates a source from a seed, positioned at the start of stream 0.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a source on its own stream of the seeded generator.
    ///
    /// Distinct `stream` values under the same seed never overlap.
    #[must_use]
    pub fn substream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self::new(rng)
    }
}

impl<R: Rng> OutcomeSource for BernoulliOutcomes<R> {
    fn next_is_win(&mut self, hit_rate: f64) -> bool {
        self.rng.random::<f64>() < hit_rate
    }
}

/// Fixed outcome sequence, replayed cyclically. Ignores the hit rate.
#[derive(Debug, Clone)]
pub struct ScriptedOutcomes {
    outcomes: Vec<bool>,
    cursor: usize,
}

impl ScriptedOutcomes {
    /// Creates a scripted source. An empty script always loses.
    #[must_use]
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self {
            outcomes,
            cursor: 0,
        }
    }

    /// Number of outcomes drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn next_is_win(&mut self, _hit_rate: f64) -> bool {
        let win = if self.outcomes.is_empty() {
            false
        } else {
            self.outcomes[self.cursor % self.outcomes.len()]
        };
        self.cursor += 1;
        win
    }
}
