//! Catalog loading and matching configuration.

use serde::{Deserialize, Serialize};

use crate::vector::DEFAULT_DIMENSION;

// ============================================================================
// CORRUPT RECORD POLICY
// ============================================================================

/// What the loader does when a record's vector fails to decode.
///
/// Either way a wrong-dimension vector never enters the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorruptPolicy {
    /// Fail the whole load with `CorruptData`.
    #[default]
    Abort,
    /// Drop the bad record, log a warning and continue.
    Skip,
}

impl CorruptPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorruptPolicy::Abort => "abort",
            CorruptPolicy::Skip => "skip",
        }
    }

    /// Parse the snake_case name used in TOML and environment variables.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Some(CorruptPolicy::Abort),
            "skip" => Some(CorruptPolicy::Skip),
            _ => None,
        }
    }
}

// ============================================================================
// DEFAULT FUNCTIONS
// ============================================================================

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

fn default_max_rank() -> i32 {
    259
}

fn default_excluded_name_prefix() -> String {
    "flag_".to_string()
}

fn default_terms_from_matchable_only() -> bool {
    true
}

// ============================================================================
// CATALOG CONFIG
// ============================================================================

/// Configuration for building an [`EmojiCatalog`](crate::catalog::EmojiCatalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Embedding dimension every record must decode to.
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Exclusive upper rank bound of the matchable subset (`0 <= rank < max_rank`).
    #[serde(default = "default_max_rank")]
    pub max_rank: i32,

    /// Records whose name starts with this prefix are never matchable.
    #[serde(default = "default_excluded_name_prefix")]
    pub excluded_name_prefix: String,

    /// Handling of records whose vector fails to decode.
    #[serde(default)]
    pub on_corrupt: CorruptPolicy,

    /// Only matchable records may appear as recipe terms.
    #[serde(default = "default_terms_from_matchable_only")]
    pub terms_from_matchable_only: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            max_rank: default_max_rank(),
            excluded_name_prefix: default_excluded_name_prefix(),
            on_corrupt: CorruptPolicy::default(),
            terms_from_matchable_only: default_terms_from_matchable_only(),
        }
    }
}

impl CatalogConfig {
    /// Validate catalog configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.dimension == 0 {
            return Err("dimension must be > 0".to_string());
        }
        if self.max_rank <= 0 {
            return Err(format!("max_rank must be > 0, got {}", self.max_rank));
        }
        Ok(())
    }

    /// Whether a record with this name and rank belongs to the matchable subset.
    #[inline]
    pub fn is_matchable(&self, name: &str, rank: i32) -> bool {
        (0..self.max_rank).contains(&rank)
            && (self.excluded_name_prefix.is_empty()
                || !name.starts_with(&self.excluded_name_prefix))
    }
}
