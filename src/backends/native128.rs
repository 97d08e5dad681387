// src/backends/native128.rs

use num::{BigInt, ToPrimitive};
use std::fmt;
use crate::core::binary_integer::BinaryInteger;

/// Native u128 backend
///
/// Covers values up to 2^128 - 1 without heap allocation. Intermediate
/// products of two values near the top of the range overflow and are
/// reported through the checked operations.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Native128(u128);

impl Native128 {
    pub fn new(value: u128) -> Self {
        Native128(value)
    }

    pub fn value(&self) -> u128 {
        self.0
    }
}

impl BinaryInteger for Native128 {
    fn from_bigint(n: &BigInt) -> Option<Self> {
        n.to_u128().map(Native128)
    }

    fn to_bigint(&self) -> BigInt {
        BigInt::from(self.0)
    }

    fn from_i64(n: i64) -> Option<Self> {
        if n >= 0 {
            Some(Native128(n as u128))
        } else {
            None
        }
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Native128(n as u128))
    }

    fn to_u32(&self) -> Option<u32> {
        if self.0 <= u32::MAX as u128 {
            Some(self.0 as u32)
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.0 <= u64::MAX as u128 {
            Some(self.0 as u64)
        } else {
            None
        }
    }

    fn zero() -> Self {
        Native128(0)
    }

    fn one() -> Self {
        Native128(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }

    fn is_even(&self) -> bool {
        self.0 % 2 == 0
    }

    fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Native128)
    }

    fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Native128)
    }

    fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Native128)
    }

    fn checked_div(&self, other: &Self) -> Option<Self> {
        self.0.checked_div(other.0).map(Native128)
    }

    fn checked_rem(&self, other: &Self) -> Option<Self> {
        self.0.checked_rem(other.0).map(Native128)
    }

    fn checked_pow(&self, exp: u32) -> Option<Self> {
        self.0.checked_pow(exp).map(Native128)
    }

    fn checked_shl(&self, bits: u32) -> Option<Self> {
        if bits >= 128 {
            if self.0 == 0 { Some(Native128(0)) } else { None }
        } else {
            let shifted = self.0 << bits;
            if shifted >> bits == self.0 {
                Some(Native128(shifted))
            } else {
                None
            }
        }
    }

    fn shr(&self, bits: u32) -> Self {
        if bits >= 128 {
            Native128(0)
        } else {
            Native128(self.0 >> bits)
        }
    }

    fn bit(&self, position: usize) -> bool {
        if position >= 128 {
            false
        } else {
            (self.0 >> position) & 1 == 1
        }
    }

    fn bits(&self) -> usize {
        128 - self.0.leading_zeros() as usize
    }

    fn trailing_zeros(&self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            self.0.trailing_zeros()
        }
    }

    fn abs(&self) -> Self {
        *self
    }

    fn max_value() -> Option<Self> {
        Some(Native128(u128::MAX))
    }

    fn backend_name() -> &'static str {
        "Native128"
    }
}

// Arithmetic operator implementations
impl std::ops::Add for Native128 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Native128(self.0 + other.0)
    }
}

impl std::ops::Sub for Native128 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Native128(self.0 - other.0)
    }
}

impl std::ops::Mul for Native128 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Native128(self.0 * other.0)
    }
}

impl std::ops::Div for Native128 {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Native128(self.0 / other.0)
    }
}

impl std::ops::Rem for Native128 {
    type Output = Self;
    fn rem(self, other: Self) -> Self {
        Native128(self.0 % other.0)
    }
}

// Assignment operator implementations
impl std::ops::AddAssign for Native128 {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::SubAssign for Native128 {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::ops::MulAssign for Native128 {
    fn mul_assign(&mut self, other: Self) {
        self.0 *= other.0;
    }
}

impl std::ops::DivAssign for Native128 {
    fn div_assign(&mut self, other: Self) {
        self.0 /= other.0;
    }
}

impl std::ops::RemAssign for Native128 {
    fn rem_assign(&mut self, other: Self) {
        self.0 %= other.0;
    }
}

// Display and Debug implementations
impl fmt::Display for Native128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Native128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native128({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beyond_u64_range() {
        let big = Native128::new(u64::MAX as u128 + 1);
        assert_eq!(big.to_u64(), None);
        assert_eq!(big.bits(), 65);
        assert_eq!(big.trailing_zeros(), 64);
    }

    #[test]
    fn test_overflow_detection() {
        let max = Native128::new(u128::MAX);
        assert!(max.checked_add(&Native128::one()).is_none());
        assert!(max.checked_shl(1).is_none());
        assert!(Native128::new(2).checked_pow(128).is_none());
    }

    #[test]
    fn test_bigint_round_trip() {
        let n = BigInt::from(u128::MAX);
        let native = Native128::from_bigint(&n).unwrap();
        assert_eq!(native.to_bigint(), n);
        assert!(Native128::from_bigint(&(n + 1)).is_none());
    }
}
