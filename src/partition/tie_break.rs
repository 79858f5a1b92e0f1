//! Randomness used to break ties between equally good teams.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Chooses one of several equally good candidate teams.
pub trait TieBreaker {
    /// Return an index in `0..candidates`. Only called with `candidates >= 2`.
    fn pick(&mut self, candidates: usize) -> usize;
}

/// Uniform tie-breaks drawn from a ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct RandomTieBreaker {
    rng: ChaCha8Rng,
}

impl RandomTieBreaker {
    /// Seeded when `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TieBreaker for RandomTieBreaker {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.gen_range(0..candidates)
    }
}

/// Always takes the first candidate, i.e. the lowest team index.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl TieBreaker for FirstCandidate {
    fn pick(&mut self, _candidates: usize) -> usize {
        0
    }
}
