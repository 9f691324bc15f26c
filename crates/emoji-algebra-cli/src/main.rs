//! Emoji Algebra CLI
//!
//! Evaluate emoji recipes against an embedding catalog.
//!
//! # Commands
//!
//! - `eval <recipe...>`: Evaluate one recipe and print the nearest emoji
//! - `repl`: Evaluate one recipe per stdin line
//! - `legend`: Print the matchable emoji and their abbreviations
//! - `explore`: Search one- and two-term recipes and write the edges as JSON
//!
//! # Exit Codes
//! - 0: Success
//! - 1: Recoverable error (bad arguments, missing file, no candidates)
//! - 2: Corrupt catalog data

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::{exit_code_for_algebra_error, exit_code_for_error, CliExitCode};

/// Emoji Algebra - word-vector arithmetic over emoji
#[derive(Parser)]
#[command(name = "emoji-algebra")]
#[command(version)]
#[command(about = "Combine emoji embeddings with recipes like \"hec cat cat\"")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emoji catalog JSON file
    #[arg(long, env = "EMOJI_ALGEBRA_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single recipe
    Eval(commands::EvalArgs),
    /// Read recipes from stdin, one per line
    Repl,
    /// Print the matchable emoji legend
    Legend(commands::LegendArgs),
    /// Explore reachable emoji and write the recipe edges
    Explore(commands::ExploreArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let context = match commands::AppContext::load(cli.catalog.as_deref(), cli.config.as_deref()) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(exit_code_for_error(&e).into());
        }
    };

    let exit_code = match cli.command {
        Commands::Eval(args) => commands::eval_command(args, &context),
        Commands::Repl => commands::repl_command(&context),
        Commands::Legend(args) => commands::legend_command(args, &context),
        Commands::Explore(args) => commands::explore_command(args, &context),
    };

    std::process::exit(exit_code);
}
