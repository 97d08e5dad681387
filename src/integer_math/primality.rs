// src/integer_math/primality.rs

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use num::BigInt;
use rayon::prelude::*;
use crate::core::binary_integer::BinaryInteger;
use crate::core::error::MathError;
use crate::core::static_random::StaticRandom;
use crate::integer_math::modular::ModArith;

/// Witnesses proving primality deterministically for every u64.
const U64_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Base of the round-count heuristic: k = floor(log_base(bits(n))).
/// Empirically tuned; statistical confidence, not a certified bound.
pub const DEFAULT_CONFIDENCE_BASE: f64 = 1.15;

/// Hybrid Miller-Rabin primality test.
///
/// Values fitting a u64 get the deterministic witness set; larger values
/// get probabilistic rounds fanned out over rayon with cooperative
/// short-circuit once any round proves compositeness.
pub struct PrimalityOracle;

impl PrimalityOracle {
    pub fn is_prime<T: BinaryInteger>(n: &T) -> bool {
        Self::is_prime_with_base(n, DEFAULT_CONFIDENCE_BASE)
    }

    /// `is_prime` with a caller-chosen confidence base for the
    /// probabilistic round count (smaller base, more rounds).
    pub fn is_prime_with_base<T: BinaryInteger>(n: &T, confidence_base: f64) -> bool {
        if n <= &T::one() {
            return false;
        }
        if let Some(v) = n.to_u64() {
            return Self::is_prime_u64(v);
        }
        if n.is_even() {
            return false;
        }
        Self::probable_prime_parallel(n, confidence_base)
    }

    /// Deterministic Miller-Rabin for u64, with 128-bit widened products.
    pub fn is_prime_u64(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n == 2 || n == 3 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }

        let d = (n - 1) >> (n - 1).trailing_zeros();
        let r = (n - 1).trailing_zeros();

        'witness: for &a in &U64_WITNESSES {
            if a % n == 0 {
                continue;
            }

            let mut x = Self::mod_pow_u64(a, d, n);
            if x == 1 || x == n - 1 {
                continue 'witness;
            }
            for _ in 0..r - 1 {
                x = Self::mul_mod_u64(x, x, n);
                if x == n - 1 {
                    continue 'witness;
                }
            }
            return false;
        }
        true
    }

    /// Round count for a probabilistic test of a `bits`-bit candidate:
    /// floor(log_base(bits)), at least 1.
    ///
    /// The base must exceed 1.0 for the logarithm to be meaningful; a base
    /// of exactly 1.0 would divide by ln(1) = 0 and saturate the cast to
    /// usize::MAX rounds. Out-of-range bases fall back to the default.
    pub fn rounds_for_bits(bits: usize, confidence_base: f64) -> usize {
        let base = if confidence_base.is_finite() && confidence_base > 1.0 {
            confidence_base
        } else {
            warn!(
                "confidence base {} is not > 1.0, using default {}",
                confidence_base, DEFAULT_CONFIDENCE_BASE
            );
            DEFAULT_CONFIDENCE_BASE
        };
        let rounds = ((bits.max(2)) as f64).ln() / base.ln();
        (rounds.floor() as usize).max(1)
    }

    /// Smallest probable prime strictly greater than `from`.
    pub fn next_prime<T: BinaryInteger>(from: &T) -> Result<T, MathError> {
        let one = T::one();
        let two = T::from_u64(2).ok_or(MathError::Overflow)?;
        if from < &two {
            return Ok(two);
        }

        let mut result = from.checked_add(&one).ok_or(MathError::Overflow)?;
        if result.is_even() {
            result = result.checked_add(&one).ok_or(MathError::Overflow)?;
        }
        while !Self::is_prime(&result) {
            result = result.checked_add(&two).ok_or(MathError::Overflow)?;
        }
        Ok(result)
    }

    fn probable_prime_parallel<T: BinaryInteger>(n: &T, confidence_base: f64) -> bool {
        let rounds = Self::rounds_for_bits(n.bits(), confidence_base);
        debug!("probabilistic primality: {} bits, {} rounds", n.bits(), rounds);

        let n_minus_1 = n.clone() - T::one();
        let r = n_minus_1.trailing_zeros();
        let d = n_minus_1.shr(r);

        let n_big = n.to_bigint();
        let lower = BigInt::from(2);
        let upper = &n_big - 2;

        let composite = AtomicBool::new(false);
        (0..rounds).into_par_iter().for_each(|_| {
            if composite.load(Ordering::Relaxed) {
                return;
            }

            let mut rng = StaticRandom::new();
            let base_big = rng.next_bigint(&lower, &upper);
            let base = T::from_bigint(&base_big).expect("witness below n fits the backend");

            if Self::witness_proves_composite(&base, &d, r, n, &n_minus_1) {
                composite.store(true, Ordering::Relaxed);
            }
        });

        !composite.load(Ordering::Relaxed)
    }

    // One Miller-Rabin round: composite unless a^d is 1 or n-1, or some
    // repeated squaring reaches n-1.
    fn witness_proves_composite<T: BinaryInteger>(
        base: &T,
        d: &T,
        r: u32,
        n: &T,
        n_minus_1: &T,
    ) -> bool {
        let mut x = ModArith::mod_pow(base, d, n).expect("modulus exceeds 1");
        if x.is_one() || &x == n_minus_1 {
            return false;
        }
        for _ in 0..r.saturating_sub(1) {
            x = ModArith::mod_mul(&x, &x, n).expect("modulus exceeds 1");
            if &x == n_minus_1 {
                return false;
            }
        }
        true
    }

    fn mod_pow_u64(mut base: u64, mut exp: u64, m: u64) -> u64 {
        if m <= 1 {
            return 0;
        }
        let mut result = 1u64;
        base %= m;
        while exp > 0 {
            if exp % 2 == 1 {
                result = Self::mul_mod_u64(result, base, m);
            }
            exp >>= 1;
            base = Self::mul_mod_u64(base, base, m);
        }
        result
    }

    fn mul_mod_u64(a: u64, b: u64, m: u64) -> u64 {
        (a as u128 * b as u128 % m as u128) as u64
    }
}
