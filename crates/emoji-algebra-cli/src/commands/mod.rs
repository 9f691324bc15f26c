//! Command handlers.
//!
//! Every handler receives the loaded [`AppContext`] and returns a process
//! exit code. Catalog and config loading happens once, before dispatch.

mod eval;
mod explore;
mod legend;
mod repl;

pub use eval::{eval_command, evaluate_line, EvalArgs};
pub use explore::{explore_command, ExploreArgs};
pub use legend::{legend_command, LegendArgs};
pub use repl::repl_command;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use emoji_algebra_core::{AlgebraConfig, EmojiCatalog};

/// Configuration and catalog shared by all commands.
#[derive(Debug)]
pub struct AppContext {
    pub config: AlgebraConfig,
    pub catalog: EmojiCatalog,
}

impl AppContext {
    /// Load config (file, then environment overrides) and the catalog.
    ///
    /// # Errors
    /// - no catalog path was given
    /// - config or catalog loading fails (the [`AlgebraError`] is kept in
    ///   the chain for exit-code mapping)
    ///
    /// [`AlgebraError`]: emoji_algebra_core::AlgebraError
    pub fn load(catalog_path: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => AlgebraConfig::from_file(path)?,
            None => AlgebraConfig::default(),
        }
        .with_env_overrides();
        config.validate()?;
        debug!(?config, "Configuration loaded");

        let catalog_path = catalog_path
            .ok_or_else(|| anyhow!("no catalog given; pass --catalog or set EMOJI_ALGEBRA_CATALOG"))?;
        let catalog = EmojiCatalog::from_file(catalog_path, &config.catalog)
            .with_context(|| format!("Failed to load catalog '{}'", catalog_path.display()))?;

        info!(
            path = %catalog_path.display(),
            records = catalog.len(),
            matchable = catalog.matchable_len(),
            "Catalog ready"
        );

        Ok(Self { config, catalog })
    }
}
