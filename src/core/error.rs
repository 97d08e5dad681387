// src/core/error.rs

use std::error::Error;
use std::fmt;

/// Failures raised by the number-theory routines.
///
/// `Domain` covers input validation (negative factorial argument,
/// non-positive modulus, out-of-range sieve limit); it is raised before any
/// computation starts. The remaining variants are arithmetic
/// impossibilities discovered mid-computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Input outside the operation's domain
    Domain(String),
    /// No modular inverse exists: gcd(a, m) != 1
    NoInverse,
    /// A divisor degenerated to zero inside an iteration
    ZeroDivisor,
    /// A fixed-width backend signaled overflow
    Overflow,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Domain(msg) => write!(f, "domain error: {}", msg),
            MathError::NoInverse => write!(f, "no modular inverse exists"),
            MathError::ZeroDivisor => write!(f, "zero divisor in iteration"),
            MathError::Overflow => write!(f, "fixed-width arithmetic overflow"),
        }
    }
}

impl Error for MathError {}

impl MathError {
    pub fn domain(msg: impl Into<String>) -> Self {
        MathError::Domain(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MathError::domain("negative input");
        assert_eq!(err.to_string(), "domain error: negative input");
        assert_eq!(MathError::NoInverse.to_string(), "no modular inverse exists");
    }

    #[test]
    fn test_variants_distinct() {
        assert_ne!(MathError::NoInverse, MathError::Overflow);
        assert_ne!(MathError::domain("x"), MathError::ZeroDivisor);
    }
}
