// src/integer_math/gcd.rs

use num::{BigInt, One, Zero};
use crate::core::binary_integer::BinaryInteger;
use crate::core::error::MathError;

pub struct GCD;

impl GCD {
    /// Binary GCD (Stein's algorithm): shifts and subtraction only, no
    /// division. gcd(0, b) = b, gcd(a, 0) = a.
    pub fn find_gcd_pair<T: BinaryInteger>(left: &T, right: &T) -> T {
        let mut a = left.abs();
        let mut b = right.abs();

        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }

        let i = a.trailing_zeros();
        let j = b.trailing_zeros();
        a = a.shr(i);
        b = b.shr(j);
        let k = i.min(j);

        loop {
            // invariant: a and b both odd, a <= b after the swap
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }

            b = b - a.clone();

            if b.is_zero() {
                // shifting back k bits cannot exceed the original operand
                return a.checked_shl(k).expect("gcd shift cannot overflow");
            }

            b = b.shr(b.trailing_zeros());
        }
    }

    /// Extended Euclidean algorithm: returns (g, x, y) with a*x + b*y = g.
    ///
    /// The quotient-based recurrence is used here instead of the binary
    /// form above because the Bezout coefficients fall directly out of the
    /// explicit quotients. Coefficients may be negative even over unsigned
    /// backends, so they are returned as BigInt.
    pub fn extended_gcd<T: BinaryInteger>(left: &T, right: &T) -> Result<(T, BigInt, BigInt), MathError> {
        if left < &T::zero() || right < &T::zero() {
            return Err(MathError::domain("extended_gcd requires non-negative operands"));
        }

        let mut old_r = left.to_bigint();
        let mut r = right.to_bigint();
        let mut old_s = BigInt::one();
        let mut s = BigInt::zero();
        let mut old_t = BigInt::zero();
        let mut t = BigInt::one();

        while !r.is_zero() {
            let quotient = &old_r / &r;

            let next_r = &old_r - &quotient * &r;
            old_r = std::mem::replace(&mut r, next_r);

            let next_s = &old_s - &quotient * &s;
            old_s = std::mem::replace(&mut s, next_s);

            let next_t = &old_t - &quotient * &t;
            old_t = std::mem::replace(&mut t, next_t);
        }

        let g = T::from_bigint(&old_r).expect("gcd fits any operand backend");
        Ok((g, old_s, old_t))
    }

    /// Left fold of the pairwise gcd; gcd of the empty list is 0.
    pub fn find_gcd<T: BinaryInteger>(numbers: &[T]) -> T {
        numbers.iter().fold(T::zero(), |acc, x| Self::find_gcd_pair(&acc, x))
    }

    /// lcm(a, b) = a / gcd(a, b) * b, dividing first to keep the
    /// intermediate small. Overflow on a fixed-width backend is an error.
    pub fn find_lcm_pair<T: BinaryInteger>(left: &T, right: &T) -> Result<T, MathError> {
        let abs_left = left.abs();
        let abs_right = right.abs();

        if abs_left.is_zero() || abs_right.is_zero() {
            return Ok(T::zero());
        }

        let g = Self::find_gcd_pair(&abs_left, &abs_right);
        let reduced = abs_left
            .checked_div(&g)
            .ok_or(MathError::ZeroDivisor)?;
        reduced.checked_mul(&abs_right).ok_or(MathError::Overflow)
    }

    /// Left fold of the pairwise lcm; lcm of the empty list is 1.
    pub fn find_lcm<T: BinaryInteger>(numbers: &[T]) -> Result<T, MathError> {
        let mut acc = T::one();
        for x in numbers {
            acc = Self::find_lcm_pair(&acc, x)?;
        }
        Ok(acc)
    }

    pub fn are_coprime<T: BinaryInteger>(numbers: &[T]) -> bool {
        Self::find_gcd(numbers).is_one()
    }
}
