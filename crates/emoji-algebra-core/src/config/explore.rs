//! Recipe exploration settings.

use serde::{Deserialize, Serialize};

fn default_seed_count() -> usize {
    10
}

fn default_max_attempts() -> usize {
    100_000
}

/// Bounds for [`explore`](crate::explore::explore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// Number of lowest-ranked matchable records that start out "known".
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,

    /// Hard cap on evaluated recipes.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            seed_count: default_seed_count(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl ExploreConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.seed_count == 0 {
            return Err("seed_count must be > 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be > 0".to_string());
        }
        Ok(())
    }
}
