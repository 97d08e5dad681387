// src/core/static_random.rs

use num::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed random source.
///
/// Each instance is independently seeded from the OS, so concurrent callers
/// (e.g. parallel primality rounds) create their own instance instead of
/// contending on a shared one.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed[..]);
        let mut rng = ChaCha8Rng::from_seed(seed);
        let counter = rng.random_range(100..200);
        for _ in 0..counter {
            rng.random::<u32>();
        }
        StaticRandom { rng }
    }

    pub fn next_range(&mut self, min_value: u32, max_value: u32) -> u32 {
        self.rng.random_range(min_value..max_value)
    }

    pub fn next_bytes(&mut self, bytes: &mut [u8]) {
        self.rng.fill(bytes);
    }

    /// Uniform draw from [lower, upper], by rejection over a byte buffer
    /// sized to the interval width.
    pub fn next_bigint(&mut self, lower: &BigInt, upper: &BigInt) -> BigInt {
        assert!(lower <= upper, "upper must be greater than or equal to lower");

        let delta = upper - lower;
        let delta_bytes = delta.to_bytes_be().1;
        let mut buffer = vec![0u8; delta_bytes.len()];

        loop {
            self.next_bytes(&mut buffer);
            let result = BigInt::from_bytes_be(num::bigint::Sign::Plus, &buffer) + lower;

            if &result >= lower && &result <= upper {
                return result;
            }
        }
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_range_bounds() {
        let mut rng = StaticRandom::new();
        for _ in 0..100 {
            let v = rng.next_range(5, 10);
            assert!((5..10).contains(&v));
        }
    }

    #[test]
    fn test_next_bigint_bounds() {
        let mut rng = StaticRandom::new();
        let lower = BigInt::from(2);
        let upper = BigInt::from(1_000_000);
        for _ in 0..100 {
            let v = rng.next_bigint(&lower, &upper);
            assert!(v >= lower && v <= upper);
        }
    }
}
