// src/integer_math/integer_root.rs

use crate::core::binary_integer::BinaryInteger;
use crate::core::error::MathError;

/// Newton-Raphson integer nth roots with exact-floor correction.
pub struct RootExtractor;

impl RootExtractor {
    /// floor(value^(1/n)) for value >= 0, n >= 1.
    ///
    /// Seeds the iteration at 2^(floor(log2(value) / n)) and runs
    /// guess = ((n-1)*guess + value / guess^(n-1)) / n until successive
    /// guesses differ by at most 1, then nudges to the exact floor.
    pub fn integer_root_n<T: BinaryInteger>(value: &T, n: u32) -> Result<T, MathError> {
        if n == 0 {
            return Err(MathError::domain("root order must be at least 1"));
        }
        if value < &T::zero() {
            return Err(MathError::domain("integer_root_n requires a non-negative value"));
        }
        if n == 1 || value.is_zero() || value.is_one() {
            return Ok(value.clone());
        }

        let one = T::one();
        let n_t = T::from_u64(n as u64).ok_or(MathError::Overflow)?;
        let n_minus_1 = T::from_u64((n - 1) as u64).ok_or(MathError::Overflow)?;

        // 2^(floor(log2(value) / n)); log2(value) = bits - 1
        let log2 = (value.bits() - 1) as u32;
        let mut guess = one.checked_shl(log2 / n).ok_or(MathError::Overflow)?;

        loop {
            let power = guess.checked_pow(n - 1).ok_or(MathError::Overflow)?;
            if power.is_zero() {
                return Err(MathError::ZeroDivisor);
            }

            let scaled = n_minus_1.checked_mul(&guess).ok_or(MathError::Overflow)?;
            let quotient = value.checked_div(&power).ok_or(MathError::ZeroDivisor)?;
            let next = scaled
                .checked_add(&quotient)
                .ok_or(MathError::Overflow)?
                .checked_div(&n_t)
                .ok_or(MathError::ZeroDivisor)?;

            let delta = if next > guess {
                next.clone() - guess.clone()
            } else {
                guess.clone() - next.clone()
            };
            guess = next;
            if delta <= one {
                break;
            }
        }

        // Newton lands within 1 of the floor; correct exactly.
        loop {
            let up = guess.checked_add(&one).ok_or(MathError::Overflow)?;
            match up.checked_pow(n) {
                Some(p) if &p <= value => guess = up,
                _ => break,
            }
        }
        loop {
            match guess.checked_pow(n) {
                Some(p) if &p <= value => break,
                // overflow means guess^n certainly exceeds value
                _ => guess = guess - one.clone(),
            }
        }

        Ok(guess)
    }

    /// True when value lies in [root^n, (root+1)^n), i.e. root is the
    /// integer nth root of value.
    pub fn is_integer_root_n<T: BinaryInteger>(value: &T, n: u32, root: &T) -> Result<bool, MathError> {
        if n == 0 {
            return Err(MathError::domain("root order must be at least 1"));
        }
        if value < &T::zero() || root < &T::zero() {
            return Err(MathError::domain("is_integer_root_n requires non-negative arguments"));
        }

        let lower_holds = match root.checked_pow(n) {
            Some(p) => &p <= value,
            // root^n overflowed the backend, so it exceeds any representable value
            None => false,
        };
        if !lower_holds {
            return Ok(false);
        }

        let upper = root
            .checked_add(&T::one())
            .ok_or(MathError::Overflow)?;
        let upper_holds = match upper.checked_pow(n) {
            Some(p) => value < &p,
            // (root+1)^n overflowed: every representable value is below it
            None => true,
        };
        Ok(upper_holds)
    }

    /// True when value = root^n exactly.
    pub fn is_perfect_root_n<T: BinaryInteger>(value: &T, n: u32, root: &T) -> Result<bool, MathError> {
        if n == 0 {
            return Err(MathError::domain("root order must be at least 1"));
        }
        if value < &T::zero() || root < &T::zero() {
            return Err(MathError::domain("is_perfect_root_n requires non-negative arguments"));
        }
        Ok(match root.checked_pow(n) {
            Some(p) => &p == value,
            None => false,
        })
    }
}
