// src/core/mod.rs

pub mod binary_integer;
pub mod error;
pub mod static_random;
