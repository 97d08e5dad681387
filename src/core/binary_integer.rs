// src/core/binary_integer.rs

use num::BigInt;
use std::ops::{Add, Sub, Mul, Div, Rem, AddAssign, SubAssign, MulAssign, DivAssign, RemAssign};
use std::cmp::Ord;
use std::fmt::{Debug, Display};

/// Core trait for generic integer arithmetic
///
/// This trait abstracts over different integer representations, so the
/// number-theory routines can be instantiated over fixed-width native
/// integers or an arbitrary-precision type.
///
/// Implementations:
/// - Native64: u64 for values up to 2^64 - 1
/// - Native128: u128 for values up to 2^128 - 1
/// - BigIntBackend: num::BigInt, unbounded
///
/// All arithmetic that can overflow is exposed through checked operations
/// returning `Option`; fixed-width backends report every overflow, the
/// arbitrary-precision backend never does. Nothing wraps silently.
pub trait BinaryInteger:
    Clone +
    Debug +
    Display +
    Eq +
    Ord +
    Add<Output = Self> +
    Sub<Output = Self> +
    Mul<Output = Self> +
    Div<Output = Self> +
    Rem<Output = Self> +
    AddAssign +
    SubAssign +
    MulAssign +
    DivAssign +
    RemAssign +
    Sized +
    Send +
    Sync
{
    /// Create from BigInt, returning None if value exceeds backend capacity
    fn from_bigint(n: &BigInt) -> Option<Self>;

    /// Convert to BigInt (always succeeds)
    fn to_bigint(&self) -> BigInt;

    /// Create from i64
    fn from_i64(n: i64) -> Option<Self>;

    /// Create from u64
    fn from_u64(n: u64) -> Option<Self>;

    /// Try to convert to u32 (for optimization fast paths)
    fn to_u32(&self) -> Option<u32>;

    /// Try to convert to u64 (for optimization fast paths)
    fn to_u64(&self) -> Option<u64>;

    /// Create zero value
    fn zero() -> Self;

    /// Create one value
    fn one() -> Self;

    /// Check if value is zero
    fn is_zero(&self) -> bool;

    /// Check if value is one
    fn is_one(&self) -> bool;

    /// Check if value is even
    fn is_even(&self) -> bool;

    /// Checked addition (returns None on overflow)
    fn checked_add(&self, other: &Self) -> Option<Self>;

    /// Checked subtraction (returns None on underflow)
    fn checked_sub(&self, other: &Self) -> Option<Self>;

    /// Checked multiplication (returns None on overflow)
    fn checked_mul(&self, other: &Self) -> Option<Self>;

    /// Checked division (returns None if divisor is zero)
    fn checked_div(&self, other: &Self) -> Option<Self>;

    /// Checked remainder (returns None if divisor is zero)
    fn checked_rem(&self, other: &Self) -> Option<Self>;

    /// Checked exponentiation: self^exp (returns None on overflow)
    fn checked_pow(&self, exp: u32) -> Option<Self>;

    /// Checked left shift (returns None if bits are shifted out)
    fn checked_shl(&self, bits: u32) -> Option<Self>;

    /// Logical right shift
    fn shr(&self, bits: u32) -> Self;

    /// Get bit at position (0 = LSB)
    fn bit(&self, position: usize) -> bool;

    /// Number of bits required to represent this value
    fn bits(&self) -> usize;

    /// Number of trailing zero bits; zero for the value zero
    fn trailing_zeros(&self) -> u32;

    /// Absolute value
    fn abs(&self) -> Self;

    /// Maximum value representable by this type (None for arbitrary precision)
    fn max_value() -> Option<Self>;

    /// Backend type name for debugging/logging
    fn backend_name() -> &'static str;
}

/// Backend type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Native64,
    Native128,
    Arbitrary,
}

impl BackendType {
    pub fn name(&self) -> &'static str {
        match self {
            BackendType::Native64 => "Native64",
            BackendType::Native128 => "Native128",
            BackendType::Arbitrary => "Arbitrary (BigInt)",
        }
    }
}

/// Select the narrowest backend whose capacity holds `n`.
///
/// Fixed-width backends overflow on intermediates well before their maximum,
/// so callers doing factorials or lcm folds should size up a tier.
pub fn select_backend(n: &BigInt) -> BackendType {
    let bits = n.bits() as usize;
    if bits <= 64 {
        BackendType::Native64
    } else if bits <= 128 {
        BackendType::Native128
    } else {
        BackendType::Arbitrary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn test_backend_selection() {
        let n = BigInt::from(10_000_000_000_u64);
        assert_eq!(select_backend(&n), BackendType::Native64);

        // 2^64 needs 65 bits
        let n = BigInt::from(u64::MAX) + 1;
        assert_eq!(select_backend(&n), BackendType::Native128);

        // 2^128 needs 129 bits
        let n = BigInt::from(u128::MAX) + 1;
        assert_eq!(select_backend(&n), BackendType::Arbitrary);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(BackendType::Native64.name(), "Native64");
        assert_eq!(BackendType::Arbitrary.name(), "Arbitrary (BigInt)");
    }
}
