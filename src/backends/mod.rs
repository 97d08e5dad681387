// src/backends/mod.rs

pub mod native64;
pub mod native128;
pub mod bigint_backend;

pub use native64::Native64;
pub use native128::Native128;
pub use bigint_backend::BigIntBackend;
