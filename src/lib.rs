// src/lib.rs

pub mod core;
pub mod backends;
pub mod config;
pub mod integer_math;

pub use crate::core::binary_integer::{BackendType, BinaryInteger, select_backend};
pub use crate::core::error::MathError;
pub use crate::backends::{BigIntBackend, Native128, Native64};
pub use crate::integer_math::{
    DivisorSummary, Factorizer, FactorialEngine, GCD, ModArith, PrimalityOracle, PrimeSieve,
    RootExtractor,
};
