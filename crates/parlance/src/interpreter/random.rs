//! Random sources for variation selection.
//!
//! The renderer never reaches for a global generator: every call that may
//! pick a variation takes a `&mut dyn RandomSource`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// The next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// A uniformly chosen index below `len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_uniform() * len as f64).floor() as usize;
        scaled.min(len.saturating_sub(1))
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_uniform(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// A reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of values, cycling when it runs out.
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
///
/// ```
/// use parlance::{RandomSource, ScriptedRandom};
///
/// let mut random = ScriptedRandom::new([0.0, 0.5, 0.99]);
/// assert_eq!(random.pick_index(2), 0);
/// assert_eq!(random.pick_index(2), 1);
/// assert_eq!(random.pick_index(2), 1);
/// assert_eq!(random.pick_index(2), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            position: 0,
        }
    }

    /// Values that select each index of a `len`-element candidate list in
    /// turn.
    pub fn covering(len: usize) -> Self {
        let step = 1.0 / len.max(1) as f64;
        Self::new((0..len).map(|i| (i as f64 + 0.5) * step))
    }
}

impl RandomSource for ScriptedRandom {
    fn next_uniform(&mut self) -> f64 {
        let Some(value) = self.values.get(self.position % self.values.len().max(1)) else {
            return 0.0;
        };
        self.position += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
