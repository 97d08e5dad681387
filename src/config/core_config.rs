// src/config/core_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

use crate::integer_math::primality::DEFAULT_CONFIDENCE_BASE;
use crate::integer_math::prime_sieve::MAX_SIEVE_LIMIT;

/// Main numcore configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Number of threads for the parallel primality rounds
    #[serde(default)]
    pub threads: Option<usize>,

    /// Upper bound accepted by the sieve builder
    pub max_sieve_limit: usize,

    /// Primality tuning
    pub primality: PrimalityConfig,
}

/// Tuning for the probabilistic primality path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimalityConfig {
    /// Base of the round-count heuristic log_base(bits); smaller means
    /// more rounds and higher confidence
    pub confidence_base: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            log_level: "info".to_string(),
            threads: None, // Use Rayon's default
            max_sieve_limit: MAX_SIEVE_LIMIT,
            primality: PrimalityConfig::default(),
        }
    }
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        PrimalityConfig {
            confidence_base: DEFAULT_CONFIDENCE_BASE,
        }
    }
}

impl CoreConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("numcore.toml").exists() {
            builder = builder.add_source(File::with_name("numcore.toml"));
        } else if Path::new("numcore.yaml").exists() {
            builder = builder.add_source(File::with_name("numcore.yaml"));
        }

        // Override with environment variables (prefix: NUMCORE_)
        builder = builder.add_source(
            Environment::with_prefix("NUMCORE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::builder_with_defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("NUMCORE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    fn builder_with_defaults() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("max_sieve_limit", MAX_SIEVE_LIMIT as u64)?
            .set_default("primality.confidence_base", DEFAULT_CONFIDENCE_BASE)
    }

    /// Worker count for the parallel primality rounds
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}
