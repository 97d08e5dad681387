// src/integer_math/factorization.rs

use log::debug;
use crate::core::binary_integer::BinaryInteger;
use crate::core::error::MathError;

/// Divisor-function summary for one n: sigma_0 (count), sigma_1 (sum) and
/// the aliquot sum sigma_1 - n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisorSummary<T> {
    pub count: u64,
    pub sum: T,
    pub aliquot_sum: T,
}

/// Wheel increments skipping every multiple of 2, 3 and 5; the cycle starts
/// at candidate 7 (7, 11, 13, 17, 19, 23, 29, 31, 37, ...).
const WHEEL: [u64; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

pub struct Factorizer;

impl Factorizer {
    /// Complete prime factorization with multiplicity, ascending.
    /// Product of the returned factors equals n; every factor is prime.
    pub fn prime_factors<T: BinaryInteger>(n: &T) -> Result<Vec<T>, MathError> {
        if n <= &T::zero() {
            return Err(MathError::domain("factorization requires n > 0"));
        }

        let mut remaining = n.clone();
        let mut factors = Vec::new();

        for small in [2u64, 3, 5] {
            let p = T::from_u64(small).ok_or(MathError::Overflow)?;
            while (remaining.clone() % p.clone()).is_zero() {
                factors.push(p.clone());
                remaining = remaining / p.clone();
            }
        }

        let mut candidate = T::from_u64(7).ok_or(MathError::Overflow)?;
        let mut wheel_index = 0usize;
        loop {
            // candidate^2 overflowing the backend also means it exceeds remaining
            match candidate.checked_mul(&candidate) {
                Some(square) if square <= remaining => {}
                _ => break,
            }

            while (remaining.clone() % candidate.clone()).is_zero() {
                factors.push(candidate.clone());
                remaining = remaining / candidate.clone();
            }

            let step = T::from_u64(WHEEL[wheel_index]).ok_or(MathError::Overflow)?;
            candidate = candidate.checked_add(&step).ok_or(MathError::Overflow)?;
            wheel_index = (wheel_index + 1) % WHEEL.len();
        }

        if remaining > T::one() {
            // whatever survives the wheel is itself prime
            factors.push(remaining);
        }

        debug!("factored {} into {} prime factors", n, factors.len());
        Ok(factors)
    }

    /// (sigma_0, sigma_1, aliquot sum). n = 0 yields the all-zero summary;
    /// negative n is a domain error.
    pub fn divisor_summary<T: BinaryInteger>(n: &T) -> Result<DivisorSummary<T>, MathError> {
        if n < &T::zero() {
            return Err(MathError::domain("divisor_summary requires n >= 0"));
        }
        if n.is_zero() {
            return Ok(DivisorSummary {
                count: 0,
                sum: T::zero(),
                aliquot_sum: T::zero(),
            });
        }

        let factors = Self::prime_factors(n)?;

        let mut count = 1u64;
        let mut sum = T::one();
        let mut i = 0usize;
        while i < factors.len() {
            let prime = factors[i].clone();
            let mut exponent = 0u64;
            // geometric series 1 + p + ... + p^e for this prime power
            let mut series = T::one();
            let mut power = T::one();
            while i < factors.len() && factors[i] == prime {
                power = power.checked_mul(&prime).ok_or(MathError::Overflow)?;
                series = series.checked_add(&power).ok_or(MathError::Overflow)?;
                exponent += 1;
                i += 1;
            }
            count *= exponent + 1;
            sum = sum.checked_mul(&series).ok_or(MathError::Overflow)?;
        }

        let aliquot_sum = sum.checked_sub(n).ok_or(MathError::Overflow)?;
        Ok(DivisorSummary { count, sum, aliquot_sum })
    }

    /// All divisors of n, unordered: each i up to sqrt(n) paired with n/i.
    pub fn divisors<T: BinaryInteger>(n: &T) -> Result<Vec<T>, MathError> {
        if n < &T::zero() {
            return Err(MathError::domain("divisors requires n >= 0"));
        }
        if n.is_zero() {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        let mut i = T::one();
        loop {
            match i.checked_mul(&i) {
                Some(square) if square <= *n => {}
                _ => break,
            }

            if (n.clone() % i.clone()).is_zero() {
                let pair = n.clone() / i.clone();
                result.push(i.clone());
                if pair != i {
                    result.push(pair);
                }
            }

            i = i.checked_add(&T::one()).ok_or(MathError::Overflow)?;
        }

        Ok(result)
    }

    /// Product of the distinct prime factors of n.
    pub fn radical<T: BinaryInteger>(n: &T) -> Result<T, MathError> {
        let factors = Self::prime_factors(n)?;
        let mut product = T::one();
        let mut last: Option<T> = None;
        for f in factors {
            if last.as_ref() != Some(&f) {
                product = product.checked_mul(&f).ok_or(MathError::Overflow)?;
                last = Some(f);
            }
        }
        Ok(product)
    }

    /// True when no prime divides n more than once.
    pub fn is_squarefree<T: BinaryInteger>(n: &T) -> Result<bool, MathError> {
        let factors = Self::prime_factors(n)?;
        Ok(factors.windows(2).all(|w| w[0] != w[1]))
    }
}
