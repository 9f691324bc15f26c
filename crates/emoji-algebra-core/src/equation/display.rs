//! Glyph rendering of an equation, e.g. `😻 - 🐱` or `(🎉 + Ⓜ) / 3`.

use std::fmt;

use super::{Equation, EquationTerm};

impl fmt::Display for EquationTerm<'_> {
    /// Unsigned form: `|c|` (when not 1) followed by the glyph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.coefficient.unsigned_abs();
        if magnitude != 1 {
            write!(f, "{}", magnitude)?;
        }
        f.write_str(&self.record.glyph)
    }
}

impl fmt::Display for Equation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return Ok(());
        }

        let grouped = self.scale != 1 && self.terms.len() > 1;
        if grouped {
            f.write_str("(")?;
        }

        for (i, term) in self.terms.iter().enumerate() {
            match (i, term.coefficient < 0) {
                (0, false) => {}
                (0, true) => f.write_str("-")?,
                (_, false) => f.write_str(" + ")?,
                (_, true) => f.write_str(" - ")?,
            }
            write!(f, "{}", term)?;
        }

        if grouped {
            f.write_str(")")?;
        }
        if self.scale != 1 {
            write!(f, " / {}", self.scale)?;
        }
        Ok(())
    }
}
