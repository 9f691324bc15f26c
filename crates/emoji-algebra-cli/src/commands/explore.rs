//! `explore` command: breadth-first recipe search written to JSON.
//!
//! # Output
//!
//! The full exploration (discoveries, edges, missed abbreviations) goes to
//! the output file; a short summary goes to stdout:
//!
//! ```text
//! reached 212/258 emoji in 48113 recipes
//! missed: 🦷 tth 🧲 mgn
//! edges written to edges_258_261016_142233.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use tracing::{debug, info};

use emoji_algebra_core::{explore, EmojiCatalog, Exploration};

use super::AppContext;
use crate::error::{exit_code_for_error, CliExitCode};

/// Arguments for `explore`
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// Output file (default: `edges_{count}_{yymmdd_HHMMSS}.json`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Override `[explore] seed_count`
    #[arg(long)]
    pub seeds: Option<usize>,

    /// Override `[explore] max_attempts`
    #[arg(long)]
    pub max_attempts: Option<usize>,
}

/// Default output name, stamped with local time.
pub fn default_output_name(matchable: usize) -> String {
    format!(
        "edges_{}_{}.json",
        matchable,
        Local::now().format("%y%m%d_%H%M%S")
    )
}

fn summary(catalog: &EmojiCatalog, result: &Exploration) -> Vec<String> {
    let mut lines = vec![format!(
        "reached {}/{} emoji in {} recipes",
        result.discovered.len(),
        catalog.matchable_len(),
        result.attempts
    )];
    if !result.complete {
        lines.push("stopped early: max_attempts reached".to_string());
    }
    if !result.missed.is_empty() {
        let missed: Vec<String> = result
            .missed
            .iter()
            .filter_map(|abbr| catalog.lookup_by_abbreviation(abbr))
            .map(|r| format!("{} {}", r.glyph, r.abbreviation))
            .collect();
        lines.push(format!("missed: {}", missed.join(" ")));
    }
    lines
}

fn run(args: ExploreArgs, context: &AppContext) -> Result<()> {
    let mut config = context.config.explore.clone();
    if let Some(seeds) = args.seeds {
        config.seed_count = seeds;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.max_attempts = max_attempts;
    }
    debug!(?config, "explore_command: effective config");

    let result = explore(&context.catalog, &config)?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_output_name(context.catalog.matchable_len())));
    let json = serde_json::to_string_pretty(&result).context("Failed to serialize exploration")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write edges to '{}'", path.display()))?;
    info!(path = %path.display(), edges = result.edges.len(), "Edges written");

    for line in summary(&context.catalog, &result) {
        println!("{}", line);
    }
    println!("edges written to {}", path.display());
    Ok(())
}

/// Execute the explore command
pub fn explore_command(args: ExploreArgs, context: &AppContext) -> i32 {
    match run(args, context) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit_code_for_error(&e).into()
        }
    }
}
