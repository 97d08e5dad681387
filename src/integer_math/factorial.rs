// src/integer_math/factorial.rs

use lazy_static::lazy_static;
use log::debug;
use crate::core::binary_integer::BinaryInteger;
use crate::core::error::MathError;

lazy_static! {
    /// n! for n in [0, 20]; 20! is the largest factorial that fits a u64.
    static ref SMALL_FACTORIALS: [u64; 21] = {
        let mut table = [1u64; 21];
        for i in 1..=20usize {
            table[i] = table[i - 1] * i as u64;
        }
        table
    };
}

/// Largest n whose factorial is served from the lookup table.
const LOOKUP_MAX: i64 = 20;

/// Below this n the naive iterative product beats the divide-and-conquer
/// overhead; at and above it the binary-splitting path wins.
const SPLIT_MIN: i64 = 47;

pub struct FactorialEngine;

impl FactorialEngine {
    /// n! with a tiered strategy: table lookup for n <= 20, naive product
    /// for 20 < n < 47, binary splitting for n >= 47.
    ///
    /// Negative n is a domain error. Over a fixed-width backend, overflow
    /// is reported as `MathError::Overflow`; over BigIntBackend it cannot
    /// occur.
    pub fn factorial<T: BinaryInteger>(n: i64) -> Result<T, MathError> {
        if n < 0 {
            return Err(MathError::domain("factorial requires a non-negative argument"));
        }
        if n <= LOOKUP_MAX {
            debug!("factorial({}): lookup tier", n);
            return T::from_u64(SMALL_FACTORIALS[n as usize]).ok_or(MathError::Overflow);
        }
        if n < SPLIT_MIN {
            debug!("factorial({}): naive tier", n);
            return Self::factorial_naive(n as u64);
        }
        debug!("factorial({}): binary-splitting tier on {}", n, T::backend_name());
        Self::factorial_split(n as u64)
    }

    fn factorial_naive<T: BinaryInteger>(n: u64) -> Result<T, MathError> {
        let mut product = T::one();
        for i in 2..=n {
            let factor = T::from_u64(i).ok_or(MathError::Overflow)?;
            product = product.checked_mul(&factor).ok_or(MathError::Overflow)?;
        }
        Ok(product)
    }

    /// Binary-splitting factorial.
    ///
    /// Walks the binary digits of n from the most significant down. At each
    /// level the odd numbers newly entering [1, n >> i] are multiplied with
    /// a balanced recursive split and folded into a running product; the
    /// powers of two stripped from even numbers accumulate as a single
    /// final left shift of n - popcount(n) bits.
    fn factorial_split<T: BinaryInteger>(n: u64) -> Result<T, MathError> {
        let mut partial = T::one();
        let mut result = T::one();
        let mut high = 1u64;
        let mut shift = 0u64;
        let mut h = 0u64;

        let log2n = 63 - n.leading_zeros();
        for i in (0..=log2n).rev() {
            shift += h;
            h = n >> i;
            let high_next = (h - 1) | 1;
            if high_next > high {
                let block = Self::odd_product::<T>(high + 2, high_next)?;
                partial = partial.checked_mul(&block).ok_or(MathError::Overflow)?;
                result = result.checked_mul(&partial).ok_or(MathError::Overflow)?;
            }
            high = high_next;
        }

        let shift = u32::try_from(shift).map_err(|_| MathError::Overflow)?;
        result.checked_shl(shift).ok_or(MathError::Overflow)
    }

    /// Product of the odd numbers lo, lo+2, ..., hi, split at the middle so
    /// both recursive operands carry similar bit-lengths.
    fn odd_product<T: BinaryInteger>(lo: u64, hi: u64) -> Result<T, MathError> {
        debug_assert!(lo % 2 == 1 && hi % 2 == 1);
        if lo > hi {
            return Ok(T::one());
        }

        let count = (hi - lo) / 2 + 1;
        if count <= 4 {
            let mut product = T::one();
            let mut v = lo;
            while v <= hi {
                let factor = T::from_u64(v).ok_or(MathError::Overflow)?;
                product = product.checked_mul(&factor).ok_or(MathError::Overflow)?;
                v += 2;
            }
            return Ok(product);
        }

        let mid = lo + (count / 2) * 2;
        let left = Self::odd_product::<T>(lo, mid - 2)?;
        let right = Self::odd_product::<T>(mid, hi)?;
        left.checked_mul(&right).ok_or(MathError::Overflow)
    }
}
