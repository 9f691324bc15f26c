//! `legend` command: glyph and abbreviation of every matchable emoji.

use anyhow::{bail, Result};
use clap::Args;

use emoji_algebra_core::EmojiCatalog;

use super::AppContext;
use crate::error::{exit_code_for_error, CliExitCode};

/// Arguments for `legend`
#[derive(Args, Debug)]
pub struct LegendArgs {
    /// Cells per row
    #[arg(long, default_value_t = 8)]
    pub width: usize,
}

/// Legend rows of `width` cells, each cell `"{glyph} {abbr:<6}"`.
///
/// # Errors
/// - `width` is zero
pub fn render_legend(catalog: &EmojiCatalog, width: usize) -> Result<Vec<String>> {
    if width == 0 {
        bail!("legend width must be at least 1");
    }

    let cells: Vec<String> = catalog
        .matchable_subset()
        .map(|r| format!("{} {:<6}", r.glyph, r.abbreviation))
        .collect();

    Ok(cells
        .chunks(width)
        .map(|row| row.concat().trim_end().to_string())
        .collect())
}

/// Execute the legend command
pub fn legend_command(args: LegendArgs, context: &AppContext) -> i32 {
    match render_legend(&context.catalog, args.width) {
        Ok(rows) => {
            for row in rows {
                println!("{}", row);
            }
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
    fn test_legend_rows() {
        let catalog = test_support::catalog();
        let rows = render_legend(&catalog, 3).expect("legend");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "😻 hec   🐱 cat   ❤ hrt");
        assert_eq!(rows[1], "🐶 dog");
    }

    #[test]
    fn test_legend_zero_width_rejected() {
        let catalog = test_support::catalog();
        assert!(render_legend(&catalog, 0).is_err());
    }
}
