// src/backends/native64.rs

use num::{BigInt, ToPrimitive};
use std::fmt;
use crate::core::binary_integer::BinaryInteger;

/// Native u64 backend
///
/// The fastest representation for values below 2^64. Every checked
/// operation reports overflow; the plain operator impls inherit the
/// standard library's debug-mode panics and are only used by callers that
/// have already bounded their operands.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Native64(u64);

impl Native64 {
    pub fn new(value: u64) -> Self {
        Native64(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl BinaryInteger for Native64 {
    fn from_bigint(n: &BigInt) -> Option<Self> {
        n.to_u64().map(Native64)
    }

    fn to_bigint(&self) -> BigInt {
        BigInt::from(self.0)
    }

    fn from_i64(n: i64) -> Option<Self> {
        if n >= 0 {
            Some(Native64(n as u64))
        } else {
            None
        }
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Native64(n))
    }

    fn to_u32(&self) -> Option<u32> {
        if self.0 <= u32::MAX as u64 {
            Some(self.0 as u32)
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        Some(self.0)
    }

    fn zero() -> Self {
        Native64(0)
    }

    fn one() -> Self {
        Native64(1)
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
        self.0.checked_add(other.0).map(Native64)
    }

    fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Native64)
    }

    fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Native64)
    }

    fn checked_div(&self, other: &Self) -> Option<Self> {
        self.0.checked_div(other.0).map(Native64)
    }

    fn checked_rem(&self, other: &Self) -> Option<Self> {
        self.0.checked_rem(other.0).map(Native64)
    }

    fn checked_pow(&self, exp: u32) -> Option<Self> {
        self.0.checked_pow(exp).map(Native64)
    }

    fn checked_shl(&self, bits: u32) -> Option<Self> {
        if bits >= 64 {
            if self.0 == 0 { Some(Native64(0)) } else { None }
        } else {
            let shifted = self.0 << bits;
            if shifted >> bits == self.0 {
                Some(Native64(shifted))
            } else {
                None
            }
        }
    }

    fn shr(&self, bits: u32) -> Self {
        if bits >= 64 {
            Native64(0)
        } else {
            Native64(self.0 >> bits)
        }
    }

    fn bit(&self, position: usize) -> bool {
        if position >= 64 {
            false
        } else {
            (self.0 >> position) & 1 == 1
        }
    }

    fn bits(&self) -> usize {
        64 - self.0.leading_zeros() as usize
    }

    fn trailing_zeros(&self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            self.0.trailing_zeros()
        }
    }

    fn abs(&self) -> Self {
        // u64 is always non-negative
        *self
    }

    fn max_value() -> Option<Self> {
        Some(Native64(u64::MAX))
    }

    fn backend_name() -> &'static str {
        "Native64"
    }
}

// Arithmetic operator implementations
impl std::ops::Add for Native64 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Native64(self.0 + other.0)
    }
}

impl std::ops::Sub for Native64 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Native64(self.0 - other.0)
    }
}

impl std::ops::Mul for Native64 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Native64(self.0 * other.0)
    }
}

impl std::ops::Div for Native64 {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Native64(self.0 / other.0)
    }
}

impl std::ops::Rem for Native64 {
    type Output = Self;
    fn rem(self, other: Self) -> Self {
        Native64(self.0 % other.0)
    }
}

// Assignment operator implementations
impl std::ops::AddAssign for Native64 {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::SubAssign for Native64 {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::ops::MulAssign for Native64 {
    fn mul_assign(&mut self, other: Self) {
        self.0 *= other.0;
    }
}

impl std::ops::DivAssign for Native64 {
    fn div_assign(&mut self, other: Self) {
        self.0 /= other.0;
    }
}

impl std::ops::RemAssign for Native64 {
    fn rem_assign(&mut self, other: Self) {
        self.0 %= other.0;
    }
}

// Display and Debug implementations
impl fmt::Display for Native64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Native64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native64({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        let a = Native64::new(100);
        let b = Native64::new(50);

        assert_eq!(a + b, Native64::new(150));
        assert_eq!(a - b, Native64::new(50));
        assert_eq!(a * b, Native64::new(5000));
        assert_eq!(a / b, Native64::new(2));
        assert_eq!(a % b, Native64::new(0));
    }

    #[test]
    fn test_overflow_detection() {
        let max = Native64::new(u64::MAX);
        let one = Native64::new(1);
        assert!(max.checked_add(&one).is_none());
        assert!(max.checked_mul(&Native64::new(2)).is_none());
        assert!(Native64::new(0).checked_sub(&one).is_none());
        assert!(one.checked_div(&Native64::new(0)).is_none());
    }

    #[test]
    fn test_shifts() {
        let a = Native64::new(0b1011);
        assert_eq!(a.checked_shl(4), Some(Native64::new(0b1011_0000)));
        assert_eq!(a.shr(2), Native64::new(0b10));
        assert!(Native64::new(u64::MAX).checked_shl(1).is_none());
        assert_eq!(Native64::new(0).checked_shl(100), Some(Native64::new(0)));
    }

    #[test]
    fn test_bit_queries() {
        let a = Native64::new(255);
        assert_eq!(a.bits(), 8);
        assert_eq!(Native64::new(1024).bits(), 11);
        assert_eq!(Native64::new(48).trailing_zeros(), 4);
        assert_eq!(Native64::new(0).trailing_zeros(), 0);
        assert!(Native64::new(0b100).bit(2));
        assert!(!Native64::new(0b100).bit(1));
    }

    #[test]
    fn test_bigint_conversion() {
        let n = BigInt::from(12345_u64);
        let native = Native64::from_bigint(&n).unwrap();
        assert_eq!(native.to_bigint(), n);

        let too_big = BigInt::from(u64::MAX) + 1;
        assert!(Native64::from_bigint(&too_big).is_none());
    }
}
