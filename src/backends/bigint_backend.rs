// src/backends/bigint_backend.rs

use num::{BigInt, Integer, One, Signed, ToPrimitive, Zero};
use std::fmt;
use crate::core::binary_integer::BinaryInteger;

/// num::BigInt backend (arbitrary precision)
///
/// Unbounded, so the checked operations only fail on division by zero;
/// overflow is structurally impossible. This is the backend the
/// probabilistic primality path and large factorials are expected to run
/// over.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigIntBackend(BigInt);

impl BigIntBackend {
    pub fn new(value: BigInt) -> Self {
        BigIntBackend(value)
    }

    pub fn value(&self) -> &BigInt {
        &self.0
    }

    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl BinaryInteger for BigIntBackend {
    fn from_bigint(n: &BigInt) -> Option<Self> {
        Some(BigIntBackend(n.clone()))
    }

    fn to_bigint(&self) -> BigInt {
        self.0.clone()
    }

    fn from_i64(n: i64) -> Option<Self> {
        Some(BigIntBackend(BigInt::from(n)))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(BigIntBackend(BigInt::from(n)))
    }

    fn to_u32(&self) -> Option<u32> {
        self.0.to_u32()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn zero() -> Self {
        BigIntBackend(BigInt::zero())
    }

    fn one() -> Self {
        BigIntBackend(BigInt::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn is_even(&self) -> bool {
        self.0.is_even()
    }

    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(BigIntBackend(&self.0 + &other.0))
    }

    fn checked_sub(&self, other: &Self) -> Option<Self> {
        Some(BigIntBackend(&self.0 - &other.0))
    }

    fn checked_mul(&self, other: &Self) -> Option<Self> {
        Some(BigIntBackend(&self.0 * &other.0))
    }

    fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.0.is_zero() {
            None
        } else {
            Some(BigIntBackend(&self.0 / &other.0))
        }
    }

    fn checked_rem(&self, other: &Self) -> Option<Self> {
        if other.0.is_zero() {
            None
        } else {
            Some(BigIntBackend(&self.0 % &other.0))
        }
    }

    fn checked_pow(&self, exp: u32) -> Option<Self> {
        use num::pow::Pow;
        Some(BigIntBackend(Pow::pow(&self.0, exp)))
    }

    fn checked_shl(&self, bits: u32) -> Option<Self> {
        Some(BigIntBackend(&self.0 << (bits as usize)))
    }

    fn shr(&self, bits: u32) -> Self {
        BigIntBackend(&self.0 >> (bits as usize))
    }

    fn bit(&self, position: usize) -> bool {
        self.0.bit(position as u64)
    }

    fn bits(&self) -> usize {
        self.0.bits() as usize
    }

    fn trailing_zeros(&self) -> u32 {
        self.0.trailing_zeros().unwrap_or(0) as u32
    }

    fn abs(&self) -> Self {
        BigIntBackend(self.0.abs())
    }

    fn max_value() -> Option<Self> {
        None
    }

    fn backend_name() -> &'static str {
        "BigIntBackend"
    }
}

// Arithmetic operator implementations
impl std::ops::Add for BigIntBackend {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        BigIntBackend(self.0 + other.0)
    }
}

impl std::ops::Sub for BigIntBackend {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        BigIntBackend(self.0 - other.0)
    }
}

impl std::ops::Mul for BigIntBackend {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        BigIntBackend(self.0 * other.0)
    }
}

impl std::ops::Div for BigIntBackend {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        BigIntBackend(self.0 / other.0)
    }
}

impl std::ops::Rem for BigIntBackend {
    type Output = Self;
    fn rem(self, other: Self) -> Self {
        BigIntBackend(self.0 % other.0)
    }
}

// Assignment operator implementations
impl std::ops::AddAssign for BigIntBackend {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::ops::SubAssign for BigIntBackend {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::ops::MulAssign for BigIntBackend {
    fn mul_assign(&mut self, other: Self) {
        self.0 *= other.0;
    }
}

impl std::ops::DivAssign for BigIntBackend {
    fn div_assign(&mut self, other: Self) {
        self.0 /= other.0;
    }
}

impl std::ops::RemAssign for BigIntBackend {
    fn rem_assign(&mut self, other: Self) {
        self.0 %= other.0;
    }
}

// Display and Debug implementations
impl fmt::Display for BigIntBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BigIntBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigIntBackend({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_overflows() {
        let max_u64 = BigIntBackend::from_u64(u64::MAX).unwrap();
        let doubled = max_u64.checked_mul(&max_u64).unwrap();
        assert_eq!(doubled.bits(), 128);
        assert!(BigIntBackend::max_value().is_none());
    }

    #[test]
    fn test_division_by_zero() {
        let one = BigIntBackend::one();
        let zero = BigIntBackend::zero();
        assert!(one.checked_div(&zero).is_none());
        assert!(one.checked_rem(&zero).is_none());
    }

    #[test]
    fn test_shifts_and_bits() {
        let a = BigIntBackend::from_u64(1).unwrap();
        let shifted = a.checked_shl(200).unwrap();
        assert_eq!(shifted.bits(), 201);
        assert_eq!(shifted.trailing_zeros(), 200);
        assert_eq!(shifted.shr(200), BigIntBackend::one());
        assert!(shifted.bit(200));
        assert!(!shifted.bit(199));
    }

    #[test]
    fn test_abs() {
        let neg = BigIntBackend::from_i64(-42).unwrap();
        assert_eq!(neg.abs(), BigIntBackend::from_i64(42).unwrap());
    }
}
