//! Root configuration for emoji algebra.
//!
//! # Loading Configuration
//!
//! ```rust,ignore
//! use emoji_algebra_core::AlgebraConfig;
//!
//! let config = AlgebraConfig::from_file("emoji-algebra.toml")?.with_env_overrides();
//! config.validate()?;
//! ```
//!
//! # TOML Structure
//!
//! ```toml
//! [catalog]
//! dimension = 300
//! max_rank = 259
//! excluded_name_prefix = "flag_"
//! on_corrupt = "abort"
//! terms_from_matchable_only = true
//!
//! [explore]
//! seed_count = 10
//! max_attempts = 100000
//! ```
//!
//! Invalid config returns an error; it is never silently replaced by defaults.

mod catalog;
mod explore;


pub use catalog::{CatalogConfig, CorruptPolicy};
pub use explore::ExploreConfig;

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, AlgebraResult};

// ============================================================================
// ROOT CONFIG
// ============================================================================

/// Root configuration aggregating all sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgebraConfig {
    /// Catalog loading and matchable-subset rules
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Recipe exploration bounds
    #[serde(default)]
    pub explore: ExploreConfig,
}

impl AlgebraConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// - `AlgebraError::ConfigError` if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> AlgebraResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| AlgebraError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        toml::from_str(&contents).map_err(|e| AlgebraError::ConfigError {
            message: format!("Failed to parse TOML in '{}': {}", path.display(), e),
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    /// - `AlgebraError::ConfigError` if TOML parsing fails
    pub fn from_toml_str(toml: &str) -> AlgebraResult<Self> {
        toml::from_str(toml).map_err(|e| AlgebraError::ConfigError {
            message: format!("Failed to parse TOML: {}", e),
        })
    }

    /// Serialize configuration to a TOML string.
    ///
    /// # Errors
    /// - `AlgebraError::ConfigError` if serialization fails
    pub fn to_toml_string(&self) -> AlgebraResult<String> {
        toml::to_string_pretty(self).map_err(|e| AlgebraError::ConfigError {
            message: format!("Failed to serialize to TOML: {}", e),
        })
    }

    /// Validate every section, returning the first error found.
    pub fn validate(&self) -> AlgebraResult<()> {
        self.catalog
            .validate()
            .map_err(|e| AlgebraError::ConfigError {
                message: format!("[catalog] {}", e),
            })?;

        self.explore
            .validate()
            .map_err(|e| AlgebraError::ConfigError {
                message: format!("[explore] {}", e),
            })?;

        Ok(())
    }

    /// Apply environment variable overrides. Prefix: `EMOJI_ALGEBRA_`
    ///
    /// | Variable | Config Path | Type |
    /// |----------|-------------|------|
    /// | `EMOJI_ALGEBRA_DIMENSION` | `catalog.dimension` | usize |
    /// | `EMOJI_ALGEBRA_MAX_RANK` | `catalog.max_rank` | i32 |
    /// | `EMOJI_ALGEBRA_ON_CORRUPT` | `catalog.on_corrupt` | abort \| skip |
    /// | `EMOJI_ALGEBRA_SEED_COUNT` | `explore.seed_count` | usize |
    /// | `EMOJI_ALGEBRA_MAX_ATTEMPTS` | `explore.max_attempts` | usize |
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = env::var("EMOJI_ALGEBRA_DIMENSION") {
            if let Ok(n) = val.parse::<usize>() {
                self.catalog.dimension = n;
            }
        }
        if let Ok(val) = env::var("EMOJI_ALGEBRA_MAX_RANK") {
            if let Ok(n) = val.parse::<i32>() {
                self.catalog.max_rank = n;
            }
        }
        if let Ok(val) = env::var("EMOJI_ALGEBRA_ON_CORRUPT") {
            if let Some(policy) = CorruptPolicy::parse(&val) {
                self.catalog.on_corrupt = policy;
            }
        }

        if let Ok(val) = env::var("EMOJI_ALGEBRA_SEED_COUNT") {
            if let Ok(n) = val.parse::<usize>() {
                self.explore.seed_count = n;
            }
        }
        if let Ok(val) = env::var("EMOJI_ALGEBRA_MAX_ATTEMPTS") {
            if let Ok(n) = val.parse::<usize>() {
                self.explore.max_attempts = n;
            }
        }

        self
    }
}
