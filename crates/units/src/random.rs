use crate::fixed::Fixed;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

const SPLITMIX_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(SPLITMIX_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic random source seeded from a sequence of 32-bit words.
///
/// The same seed words always produce the same sequence on every platform.
/// Seed words are folded into a 256-bit ChaCha key with SplitMix64, so
/// reordering the words yields an unrelated stream.
#[derive(Debug, Clone)]
pub struct Random {
    rng: ChaChaRng,
}

impl Random {
    /// Seeds from a single word.
    pub fn new(seed: u32) -> Self {
        Self::from_seeds(&[seed])
    }

    /// Seeds from an ordered list of words.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Random;
    ///
    /// let mut a = Random::from_seeds(&[1, 2, 3]);
    /// let mut b = Random::from_seeds(&[1, 2, 3]);
    /// assert_eq!(a.int32(), b.int32());
    /// ```
    pub fn from_seeds(seeds: &[u32]) -> Self {
        let mut state = seeds.len() as u64;
        for &word in seeds {
            state = splitmix64(&mut state) ^ word as u64;
        }

        let mut key = [0u8; 32];
        for chunk in key.chunks_exact_mut(8) {
            chunk.copy_from_slice(&splitmix64(&mut state).to_le_bytes());
        }
        Self {
            rng: ChaChaRng::from_seed(key),
        }
    }

    /// A uniformly distributed 32-bit word.
    pub fn int32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Uniform integer in `[0, n)`. Returns 0 when `n` is 0.
    pub fn int32_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.int32() % n
    }

    /// Uniform integer in `[min, max]` (both inclusive). Returns `min` when
    /// the range is empty.
    pub fn int32_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + (self.int32() as u64 % span) as i64) as i32
    }

    /// Uniform fixed-point value in `[0, 1)` built from one 32-bit draw.
    pub fn fixed(&mut self) -> Fixed {
        Fixed::from_raw(self.int32() as i64)
    }

    /// Mean of `n` uniform draws in `[0, 1)`, biased toward one half as `n`
    /// grows.
    pub fn n_fixed(&mut self, n: u32) -> Fixed {
        if n == 0 {
            return Fixed::ZERO;
        }
        let mut sum = Fixed::ZERO;
        for _ in 0..n {
            sum += self.fixed();
        }
        sum / n as i64
    }

    /// Uniform float in `[0, 1)`. Only for cosmetic values.
    pub fn double(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform float in `[0, max)`.
    pub fn double_below(&mut self, max: f64) -> f64 {
        self.double() * max
    }

    /// Uniform float in `[min, max)`.
    pub fn double_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.double() * (max - min)
    }

    /// Mean of `n` uniform floats in `[0, 1)`.
    pub fn n_double(&mut self, n: u32) -> f64 {
        if n == 0 {
            return 0.0;
        }
        (0..n).map(|_| self.double()).sum::<f64>() / n as f64
    }
}
