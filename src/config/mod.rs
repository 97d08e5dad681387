// src/config/mod.rs

pub mod core_config;

pub use core_config::{CoreConfig, PrimalityConfig};
