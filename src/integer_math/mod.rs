// src/integer_math/mod.rs

pub mod gcd;
pub mod modular;
pub mod factorial;
pub mod integer_root;
pub mod prime_sieve;
pub mod factorization;
pub mod primality;

pub use gcd::GCD;
pub use modular::ModArith;
pub use factorial::FactorialEngine;
pub use integer_root::RootExtractor;
pub use prime_sieve::PrimeSieve;
pub use factorization::{DivisorSummary, Factorizer};
pub use primality::PrimalityOracle;
