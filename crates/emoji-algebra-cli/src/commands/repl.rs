//! `repl` command: one recipe per stdin line.
//!
//! Each non-empty line prints its result followed by a `? token` line for
//! every unrecognised token. Lines that cannot be matched print an error on
//! stderr and the loop continues.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use emoji_algebra_core::EmojiCatalog;

use super::{evaluate_line, AppContext};
use crate::error::{exit_code_for_error, CliExitCode};

/// Run the read-eval-print loop over arbitrary reader/writer pairs.
///
/// Returns the number of evaluated lines.
///
/// # Errors
/// - reading input or writing output fails
pub fn run_repl<R: BufRead, W: Write>(
    catalog: &EmojiCatalog,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut evaluated = 0usize;

    for line in input.lines() {
        let line = line.context("Failed to read recipe from input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match evaluate_line(catalog, line) {
            Ok(result) => {
                writeln!(output, "{}", result.text)?;
                for token in &result.unrecognized {
                    writeln!(output, "? {}", token)?;
                }
            }
            Err(e) => {
                debug!(line, error = %e, "Recipe could not be matched");
                eprintln!("error: {}", e);
            }
        }
        output.flush()?;
        evaluated += 1;
    }

    Ok(evaluated)
}

/// Execute the repl command against stdin/stdout
pub fn repl_command(context: &AppContext) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_repl(&context.catalog, stdin.lock(), stdout.lock()) {
        Ok(evaluated) => {
            info!(evaluated, "REPL finished");
            CliExitCode::Success.into()
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit_code_for_error(&e).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;

    #[test]
    fn test_repl_one_line_per_recipe() {
        let catalog = test_support::catalog();
        let input = "hec cat cat\n\n   \ncat zebra\n";
        let mut output = Vec::new();

        let evaluated = run_repl(&catalog, input.as_bytes(), &mut output).expect("repl");
        assert_eq!(evaluated, 2);

        let text = String::from_utf8(output).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "😻 - 🐱 = ❤ hrt 0.10");
        assert!(lines[1].starts_with("🐱 = "));
        assert_eq!(lines[2], "? zebra");
    }

    #[test]
    fn test_repl_continues_after_unmatched_line() {
        let catalog = test_support::catalog();
        let input = "hec cat hrt dog\ncat\n";
        let mut output = Vec::new();

        let evaluated = run_repl(&catalog, input.as_bytes(), &mut output).expect("repl");
        assert_eq!(evaluated, 2);
        let text = String::from_utf8(output).expect("utf8");
        assert_eq!(text.lines().count(), 1);
    }
}
