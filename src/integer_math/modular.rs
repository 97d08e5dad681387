// src/integer_math/modular.rs

use num::{BigInt, One, Zero};
use crate::core::binary_integer::BinaryInteger;
use crate::core::error::MathError;

/// Modular arithmetic over any BinaryInteger backend.
///
/// All operations require a strictly positive modulus. Intermediate
/// products that would overflow a fixed-width backend are widened through
/// BigInt and reduced back; the reduced result is always smaller than the
/// modulus and therefore always fits the backend again.
pub struct ModArith;

impl ModArith {
    /// Square-and-multiply: base^exp mod m in O(bits(exp)) modular
    /// multiplications. m == 1 short-circuits to 0.
    pub fn mod_pow<T: BinaryInteger>(base: &T, exp: &T, m: &T) -> Result<T, MathError> {
        Self::require_positive_modulus(m)?;
        if exp < &T::zero() {
            return Err(MathError::domain("mod_pow requires a non-negative exponent"));
        }
        if m.is_one() {
            return Ok(T::zero());
        }

        let mut result = T::one();
        let mut b = Self::reduce(base, m)?;
        let mut e = exp.clone();

        while !e.is_zero() {
            if !e.is_even() {
                result = Self::mul_reduced(&result, &b, m);
            }
            e = e.shr(1);
            if !e.is_zero() {
                b = Self::mul_reduced(&b, &b, m);
            }
        }

        Ok(result)
    }

    /// Modular inverse by the extended Euclidean recurrence, tracking only
    /// the coefficient of `a`. Errors with NoInverse when gcd(a, m) != 1.
    pub fn mod_inv<T: BinaryInteger>(a: &T, m: &T) -> Result<T, MathError> {
        if m <= &T::one() {
            return Err(MathError::domain("mod_inv requires modulus > 1"));
        }

        let m_big = m.to_bigint();
        let mut t = BigInt::zero();
        let mut new_t = BigInt::one();
        let mut r = m_big.clone();
        let mut new_r = Self::reduce(a, m)?.to_bigint();

        while !new_r.is_zero() {
            let quotient = &r / &new_r;

            let next_t = &t - &quotient * &new_t;
            t = std::mem::replace(&mut new_t, next_t);

            let next_r = &r - &quotient * &new_r;
            r = std::mem::replace(&mut new_r, next_r);
        }

        if r > BigInt::one() {
            return Err(MathError::NoInverse);
        }
        if t < BigInt::zero() {
            t += &m_big;
        }

        Ok(T::from_bigint(&t).expect("reduced inverse fits the backend"))
    }

    pub fn mod_mul<T: BinaryInteger>(a: &T, b: &T, m: &T) -> Result<T, MathError> {
        Self::require_positive_modulus(m)?;
        let a = Self::reduce(a, m)?;
        let b = Self::reduce(b, m)?;
        Ok(Self::mul_reduced(&a, &b, m))
    }

    pub fn mod_add<T: BinaryInteger>(a: &T, b: &T, m: &T) -> Result<T, MathError> {
        Self::require_positive_modulus(m)?;
        let a = Self::reduce(a, m)?;
        let b = Self::reduce(b, m)?;
        match a.checked_add(&b) {
            Some(sum) => Self::reduce(&sum, m),
            None => {
                let wide = (a.to_bigint() + b.to_bigint()) % m.to_bigint();
                Ok(T::from_bigint(&wide).expect("reduced sum fits the backend"))
            }
        }
    }

    pub fn mod_sub<T: BinaryInteger>(a: &T, b: &T, m: &T) -> Result<T, MathError> {
        Self::require_positive_modulus(m)?;
        let a = Self::reduce(a, m)?;
        let b = Self::reduce(b, m)?;
        if a >= b {
            Self::reduce(&(a - b), m)
        } else {
            // wrap through the modulus; a - b + m stays in [0, m)
            Ok(m.clone() - (b - a))
        }
    }

    /// a / b (mod m) = a * b^-1 (mod m); fails when b has no inverse.
    pub fn mod_div<T: BinaryInteger>(a: &T, b: &T, m: &T) -> Result<T, MathError> {
        Self::require_positive_modulus(m)?;
        let inv = Self::mod_inv(b, m)?;
        Self::mod_mul(a, &inv, m)
    }

    fn require_positive_modulus<T: BinaryInteger>(m: &T) -> Result<(), MathError> {
        if m <= &T::zero() {
            Err(MathError::domain("modulus must be strictly positive"))
        } else {
            Ok(())
        }
    }

    /// Canonical residue in [0, m); handles signed backends whose remainder
    /// can come back negative.
    fn reduce<T: BinaryInteger>(a: &T, m: &T) -> Result<T, MathError> {
        let r = a.checked_rem(m).ok_or(MathError::ZeroDivisor)?;
        if r < T::zero() {
            Ok(r + m.clone())
        } else {
            Ok(r)
        }
    }

    // Both operands already in [0, m). Widen through BigInt when the raw
    // product overflows the backend.
    fn mul_reduced<T: BinaryInteger>(a: &T, b: &T, m: &T) -> T {
        match a.checked_mul(b) {
            Some(product) => product
                .checked_rem(m)
                .expect("modulus is nonzero"),
            None => {
                let wide = (a.to_bigint() * b.to_bigint()) % m.to_bigint();
                T::from_bigint(&wide).expect("reduced product fits the backend")
            }
        }
    }
}
