//! Equation evaluation and exhaustive nearest-neighbour search.
//!
//! The search is a linear scan of the catalog's matchable subset using
//! Euclidean distance. Records whose abbreviation appears in the equation
//! are skipped, so a recipe never "finds" one of its own ingredients.
//!
//! # Efficiency Score
//!
//! A presentation metric for how cleanly a recipe lands on its result:
//!
//! ```text
//! efficiency = floor(100 - min(100, 5 * scale + 20 * (d / |nearest| + d / |value|)))
//! ```
//!
//! The penalty is capped at 100. No separate floor is applied to the score.

use std::fmt;

use tracing::debug;

use crate::catalog::{EmojiCatalog, EmojiRecord};
use crate::equation::Equation;
use crate::error::{AlgebraError, AlgebraResult};
use crate::vector::Vector;

/// Evaluates equations against an explicitly supplied catalog.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'c> {
    catalog: &'c EmojiCatalog,
}

/// Outcome of evaluating one equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<'c> {
    /// Closest matchable record not used by the equation
    pub nearest: &'c EmojiRecord,
    /// Euclidean distance from the equation value to `nearest`
    pub distance: f32,
    pub efficiency: i64,
    pub value_magnitude: f32,
    pub nearest_magnitude: f32,
}

impl<'c> Evaluator<'c> {
    pub fn new(catalog: &'c EmojiCatalog) -> Self {
        Self { catalog }
    }

    #[inline]
    pub fn catalog(&self) -> &'c EmojiCatalog {
        self.catalog
    }

    /// Combined vector of the equation.
    ///
    /// # Errors
    /// - `EmptyEquation` if the equation has no terms
    #[inline]
    pub fn value<'e>(&self, equation: &'e Equation<'_>) -> AlgebraResult<&'e Vector> {
        equation.value()
    }

    /// Closest matchable record, excluding the equation's own abbreviations.
    ///
    /// Ties keep the first record in rank order.
    ///
    /// # Errors
    /// - `EmptyEquation` if the equation has no terms
    /// - `NoCandidates` if every matchable record is excluded
    pub fn nearest(&self, equation: &Equation<'_>) -> AlgebraResult<&'c EmojiRecord> {
        self.nearest_with_distance(equation).map(|(record, _)| record)
    }

    /// Value, nearest record, distance and efficiency in one pass.
    ///
    /// # Errors
    /// Same as [`Evaluator::nearest`].
    pub fn evaluate(&self, equation: &Equation<'_>) -> AlgebraResult<Evaluation<'c>> {
        let (nearest, distance) = self.nearest_with_distance(equation)?;
        let value_magnitude = equation.value()?.magnitude();
        let nearest_magnitude = nearest.vector.magnitude();
        let efficiency =
            efficiency_score(equation.scale(), distance, nearest_magnitude, value_magnitude);

        debug!(
            target: "evaluator",
            recipe = %equation.recipe(),
            nearest = %nearest.abbreviation,
            distance,
            efficiency,
            "Evaluated equation"
        );

        Ok(Evaluation {
            nearest,
            distance,
            efficiency,
            value_magnitude,
            nearest_magnitude,
        })
    }

    fn nearest_with_distance(
        &self,
        equation: &Equation<'_>,
    ) -> AlgebraResult<(&'c EmojiRecord, f32)> {
        let value = equation.value()?;

        let mut best: Option<(&'c EmojiRecord, f32)> = None;
        let mut scanned = 0usize;
        for record in self.catalog.matchable_subset() {
            if equation.uses(&record.abbreviation) {
                continue;
            }
            scanned += 1;
            let d = value.distance(&record.vector);
            let d = if d.is_nan() { f32::INFINITY } else { d };
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((record, d)),
            }
        }

        debug!(target: "evaluator", scanned, "Nearest-neighbour scan complete");

        best.ok_or(AlgebraError::NoCandidates {
            excluded: equation.used_abbreviations().len(),
        })
    }
}

/// Efficiency score for a match. Pure function of its inputs.
///
/// A zero magnitude makes the ratio infinite (or NaN), which the cap turns
/// into a score of 0.
pub fn efficiency_score(
    scale: u32,
    distance: f32,
    nearest_magnitude: f32,
    value_magnitude: f32,
) -> i64 {
    let penalty =
        5.0 * scale as f32 + 20.0 * (distance / nearest_magnitude + distance / value_magnitude);
    // f32::min ignores a NaN operand.
    (100.0 - penalty.min(100.0)).floor() as i64
}

impl fmt::Display for Evaluation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "= {} {} {:.2}",
            self.nearest.glyph, self.nearest.abbreviation, self.distance
        )
    }
}
