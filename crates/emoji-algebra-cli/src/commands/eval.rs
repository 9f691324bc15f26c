//! `eval` command: evaluate one recipe.
//!
//! # Output
//!
//! ```text
//! 😻 - 🐱 = ❤ hrt 0.10
//! ```
//!
//! A recipe with no recognised abbreviations prints a placeholder and
//! succeeds.

use clap::Args;
use tracing::{debug, warn};

use emoji_algebra_core::{AlgebraResult, EmojiCatalog, EquationBuilder, Evaluator};

use super::AppContext;
use crate::error::{exit_code_for_algebra_error, CliExitCode};

/// Printed instead of a result when the recipe has no terms.
pub const EMPTY_PLACEHOLDER: &str = "(no recognised emoji)";

/// Arguments for `eval`
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Recipe words, e.g. `hec cat cat` or `ta m 3`
    #[arg(required = true, num_args = 1..)]
    pub recipe: Vec<String>,
}

/// One evaluated input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// `{equation} {evaluation}`, or the placeholder for an empty recipe
    pub text: String,
    pub unrecognized: Vec<String>,
}

/// Parse and evaluate one line of recipe text.
///
/// # Errors
/// - `NoCandidates` if the recipe uses every matchable emoji
pub fn evaluate_line(catalog: &EmojiCatalog, input: &str) -> AlgebraResult<LineResult> {
    let equation = EquationBuilder::new(catalog).parse(input);
    let unrecognized = equation.unrecognized().to_vec();

    if equation.is_empty() {
        debug!(input, "Recipe has no terms");
        return Ok(LineResult {
            text: EMPTY_PLACEHOLDER.to_string(),
            unrecognized,
        });
    }

    let evaluation = Evaluator::new(catalog).evaluate(&equation)?;
    Ok(LineResult {
        text: format!("{} {}", equation, evaluation),
        unrecognized,
    })
}

/// Execute the eval command
pub fn eval_command(args: EvalArgs, context: &AppContext) -> i32 {
    let input = args.recipe.join(" ");
    debug!("eval_command: input={:?}", input);

    match evaluate_line(&context.catalog, &input) {
        Ok(result) => {
            for token in &result.unrecognized {
                warn!(token = %token, "Unrecognised token ignored");
            }
            println!("{}", result.text);
            CliExitCode::Success.into()
        }
        Err(e) => {
            eprintln!("error: {}", e);
            exit_code_for_algebra_error(&e).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use emoji_algebra_core::AlgebraError;

    #[test]
    fn test_evaluate_line_matches() {
        let catalog = test_support::catalog();
        let result = evaluate_line(&catalog, "hec cat cat").expect("evaluate");
        assert_eq!(result.text, "😻 - 🐱 = ❤ hrt 0.10");
        assert!(result.unrecognized.is_empty());
    }

    #[test]
    fn test_evaluate_line_reports_unknown_tokens() {
        let catalog = test_support::catalog();
        let result = evaluate_line(&catalog, "cat zebra").expect("evaluate");
        assert!(result.text.starts_with("🐱 = "));
        assert_eq!(result.unrecognized, vec!["zebra".to_string()]);
    }

    #[test]
    fn test_evaluate_line_empty_placeholder() {
        let catalog = test_support::catalog();
        let result = evaluate_line(&catalog, "zebra").expect("evaluate");
        assert_eq!(result.text, EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_evaluate_line_no_candidates() {
        let catalog = test_support::catalog();
        let err = evaluate_line(&catalog, "hec cat hrt dog").unwrap_err();
        assert!(matches!(err, AlgebraError::NoCandidates { excluded: 4 }));
    }
}
