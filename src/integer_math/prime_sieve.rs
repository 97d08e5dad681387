// src/integer_math/prime_sieve.rs

use bitvec::prelude::*;
use log::debug;
use crate::core::error::MathError;

/// Hard cap on sieve size: 2^32 bits of backing store (512 MiB).
/// Deployments wanting a tighter bound set `max_sieve_limit` in config and
/// validate before calling.
pub const MAX_SIEVE_LIMIT: usize = 1 << 32;

/// Bit-packed sieve of Eratosthenes over [0, limit].
pub struct PrimeSieve;

impl PrimeSieve {
    /// Build the sieve: bit[i] = 1 iff i is prime, for all i in [0, limit].
    ///
    /// Odd positions start set and composites are culled from factor^2
    /// upward in steps of 2*factor, so even multiples are never touched.
    pub fn build(limit: usize) -> Result<BitVec, MathError> {
        if limit > MAX_SIEVE_LIMIT {
            return Err(MathError::domain(format!(
                "sieve limit {} exceeds maximum {}",
                limit, MAX_SIEVE_LIMIT
            )));
        }
        debug!("building sieve up to {}", limit);

        let mut bits = bitvec![0; limit + 1];

        let mut i = 1;
        while i <= limit {
            bits.set(i, true);
            i += 2;
        }
        if limit >= 1 {
            bits.set(1, false);
        }
        if limit >= 2 {
            bits.set(2, true);
        }

        let mut factor = 3usize;
        while factor * factor <= limit {
            // advance to the next candidate still marked prime
            while factor * factor <= limit && !bits[factor] {
                factor += 2;
            }
            if factor * factor > limit {
                break;
            }

            let mut multiple = factor * factor;
            while multiple <= limit {
                bits.set(multiple, false);
                multiple += 2 * factor;
            }

            factor += 2;
        }

        Ok(bits)
    }

    /// Every prime in [0, limit], ascending.
    pub fn primes_up_to(limit: usize) -> Result<Vec<u64>, MathError> {
        let sieve = Self::build(limit)?;
        Ok(sieve.iter_ones().map(|i| i as u64).collect())
    }

    /// Streaming view over an already-built sieve.
    pub fn iter_primes(sieve: &BitVec) -> impl Iterator<Item = u64> + '_ {
        sieve.iter_ones().map(|i| i as u64)
    }
}
