//! Random sources for decoration passes.
//!
//! Shape builders never reach for global randomness. Anything random takes a
//! `&mut impl RandomSource`, so tests can pin a seed and assert exact output.
//!
//! # Environment Variables
//!
//! - `TINSEL_SEED`: seed picked up by [`SeededRng::from_env`] (default: 42)
//!
//! # Usage
//!
//! ```rust
//! use tinsel_core::{RandomSource, SeededRng};
//!
//! let mut a = SeededRng::new(7);
//! let mut b = SeededRng::new(7);
//! assert_eq!(a.next_u64(), b.next_u64());
//! assert!(a.below(10) < 10);
//! ```

/// Default seed for reproducibility.
pub const DEFAULT_SEED: u64 = 42;

/// Environment variable read by [`SeededRng::from_env`].
pub const SEED_ENV: &str = "TINSEL_SEED";

/// Seed from `TINSEL_SEED`, if set to a valid `u64`.
#[must_use]
pub fn env_seed() -> Option<u64> {
    parse_seed(&std::env::var(SEED_ENV).ok()?)
}

fn parse_seed(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

/// A source of pseudo-random numbers.
pub trait RandomSource {
    /// Generate the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Uniform-ish index in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }

    /// Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Deterministic PRNG using xorshift64.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl SeededRng {
    /// Create new RNG with given seed. A zero seed is mapped to 1.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Create RNG from `TINSEL_SEED`, falling back to [`DEFAULT_SEED`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env_seed().unwrap_or(DEFAULT_SEED))
    }
}

impl RandomSource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
