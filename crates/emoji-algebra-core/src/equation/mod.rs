//! Recipe parsing: free text to signed-integer-weighted emoji terms.
//!
//! # Algorithm
//!
//! 1. Lowercase the input and split on whitespace.
//! 2. Count each distinct token, visiting tokens in order of first appearance.
//! 3. Classify each distinct token once:
//!    - `Numeric(n)`: one or two ASCII digits with value >= 2. The first one
//!      becomes the scale divisor; later ones fall back to abbreviation
//!      lookup and are dropped if nothing matches.
//!    - `KnownAbbreviation(record)`: becomes a term with coefficient `f(k)`.
//!    - `Unrecognized`: ignored (kept for diagnostics).
//! 4. Sort terms by coefficient descending, then record rank ascending.
//!
//! # Coefficients
//!
//! `f(k) = -(-1)^k * (1 + (k - 1) / 2)` for multiplicity `k`:
//!
//! | k | 1 | 2 | 3 | 4 | 5 | 6 |
//! |---|---|---|---|---|---|---|
//! | f(k) | 1 | -1 | 2 | -2 | 3 | -3 |
//!
//! Typing an abbreviation twice subtracts it; a third time adds it twice.

mod display;


use std::cell::OnceCell;
use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::catalog::{EmojiCatalog, EmojiRecord};
use crate::error::{AlgebraError, AlgebraResult};
use crate::vector::Vector;

/// Classification of one distinct input token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenClass<'c> {
    /// Candidate scale divisor.
    Numeric(u32),
    /// A catalog abbreviation usable as a term.
    KnownAbbreviation(&'c EmojiRecord),
    Unrecognized,
}

impl<'c> TokenClass<'c> {
    /// Classify a lowercased token against the catalog.
    ///
    /// Numeric literals take precedence over abbreviation lookup.
    pub fn classify(token: &str, catalog: &'c EmojiCatalog) -> Self {
        if let Some(n) = parse_scale_literal(token) {
            return TokenClass::Numeric(n);
        }
        match catalog.lookup_term(token) {
            Some(record) => TokenClass::KnownAbbreviation(record),
            None => TokenClass::Unrecognized,
        }
    }
}

/// `^[0-9]{1,2}$` with value >= 2.
fn parse_scale_literal(token: &str) -> Option<u32> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok().filter(|&n| n >= 2)
}

/// Coefficient for an abbreviation typed `k` times (`k >= 1`).
#[inline]
pub fn coefficient(k: usize) -> i32 {
    debug_assert!(k >= 1, "multiplicity must be at least 1");
    let magnitude = 1 + (k.saturating_sub(1) / 2) as i32;
    if k % 2 == 1 {
        magnitude
    } else {
        -magnitude
    }
}

/// One weighted term of an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationTerm<'c> {
    pub coefficient: i32,
    pub record: &'c EmojiRecord,
}

impl EquationTerm<'_> {
    /// Number of times the abbreviation was typed to produce this coefficient.
    #[inline]
    pub fn occurrences(&self) -> usize {
        if self.coefficient > 0 {
            (2 * self.coefficient - 1) as usize
        } else {
            (-2 * self.coefficient) as usize
        }
    }
}

/// A parsed recipe: sorted terms, a scale divisor and the used abbreviations.
///
/// An equation with zero terms is a valid parse result. Callers check
/// [`Equation::is_empty`] and render a placeholder; `value()` on an empty
/// equation returns `EmptyEquation`.
#[derive(Debug, Clone)]
pub struct Equation<'c> {
    terms: Vec<EquationTerm<'c>>,
    scale: u32,
    used: BTreeSet<String>,
    unrecognized: Vec<String>,
    value: OnceCell<Vector>,
}

impl<'c> Equation<'c> {
    /// Terms sorted by coefficient descending, then rank ascending.
    #[inline]
    pub fn terms(&self) -> &[EquationTerm<'c>] {
        &self.terms
    }

    /// Positive divisor applied to the combined vector (default 1).
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Abbreviations of every term, excluded from nearest-neighbour search.
    #[inline]
    pub fn used_abbreviations(&self) -> &BTreeSet<String> {
        &self.used
    }

    #[inline]
    pub fn uses(&self, abbreviation: &str) -> bool {
        self.used.contains(abbreviation)
    }

    /// Tokens that were neither a scale nor a known abbreviation, in input order.
    #[inline]
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Combined vector `(sum c_i * v_i) / scale`, computed once and cached.
    ///
    /// # Errors
    /// - `EmptyEquation` if there are no terms
    pub fn value(&self) -> AlgebraResult<&Vector> {
        if let Some(v) = self.value.get() {
            return Ok(v);
        }
        let computed = self.compute_value()?;
        Ok(self.value.get_or_init(|| computed))
    }

    fn compute_value(&self) -> AlgebraResult<Vector> {
        let (first, rest) = self.terms.split_first().ok_or(AlgebraError::EmptyEquation)?;

        let mut acc = first.record.vector.clone();
        acc.scale_in_place(first.coefficient as f32);
        for term in rest {
            acc.add_scaled_in_place(&term.record.vector, term.coefficient as f32);
        }
        acc.scale_in_place(1.0 / self.scale as f32);

        debug!(
            target: "equation",
            terms = self.terms.len(),
            scale = self.scale,
            magnitude = acc.magnitude(),
            "Computed equation value"
        );
        Ok(acc)
    }

    /// Canonical recipe text: each abbreviation repeated per its multiplicity,
    /// followed by the scale when it is not 1.
    pub fn recipe(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for term in &self.terms {
            for _ in 0..term.occurrences() {
                parts.push(term.record.abbreviation.as_str());
            }
        }
        let mut out = parts.join(" ");
        if self.scale != 1 {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.scale.to_string());
        }
        out
    }
}

/// Parses recipe text against an explicitly supplied catalog.
#[derive(Debug, Clone, Copy)]
pub struct EquationBuilder<'c> {
    catalog: &'c EmojiCatalog,
}

impl<'c> EquationBuilder<'c> {
    pub fn new(catalog: &'c EmojiCatalog) -> Self {
        Self { catalog }
    }

    /// Parse free text into an equation. Never fails; unknown tokens are dropped.
    pub fn parse(&self, input: &str) -> Equation<'c> {
        let lowered = input.to_lowercase();

        // Distinct tokens in first-appearance order with their counts.
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in lowered.split_whitespace() {
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        let mut scale: Option<u32> = None;
        let mut terms = Vec::new();
        let mut unrecognized = Vec::new();

        for token in order {
            let k = counts[token];
            match TokenClass::classify(token, self.catalog) {
                TokenClass::Numeric(n) if scale.is_none() => scale = Some(n),
                TokenClass::Numeric(n) => match self.catalog.lookup_term(token) {
                    Some(record) => terms.push(EquationTerm {
                        coefficient: coefficient(k),
                        record,
                    }),
                    None => {
                        debug!(target: "equation", token, value = n, "Ignoring extra scale token");
                    }
                },
                TokenClass::KnownAbbreviation(record) => terms.push(EquationTerm {
                    coefficient: coefficient(k),
                    record,
                }),
                TokenClass::Unrecognized => unrecognized.push(token.to_string()),
            }
        }

        let equation = assemble(terms, scale.unwrap_or(1), unrecognized);
        debug!(
            target: "equation",
            input,
            terms = equation.terms.len(),
            scale = equation.scale,
            unrecognized = equation.unrecognized.len(),
            "Parsed recipe"
        );
        equation
    }

    /// Build an equation directly from records, one occurrence per entry.
    ///
    /// Used where recipes are generated rather than typed, so abbreviations
    /// that look numeric are never mistaken for a scale.
    pub fn from_records(&self, records: &[&'c EmojiRecord]) -> Equation<'c> {
        let mut order: Vec<&'c EmojiRecord> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &record in records {
            let count = counts.entry(record.abbreviation.as_str()).or_insert(0);
            if *count == 0 {
                order.push(record);
            }
            *count += 1;
        }

        let terms = order
            .into_iter()
            .map(|record| EquationTerm {
                coefficient: coefficient(counts[record.abbreviation.as_str()]),
                record,
            })
            .collect();
        assemble(terms, 1, Vec::new())
    }
}

/// Sort terms into canonical order and collect the used abbreviations.
fn assemble<'c>(
    mut terms: Vec<EquationTerm<'c>>,
    scale: u32,
    unrecognized: Vec<String>,
) -> Equation<'c> {
    terms.sort_by(|a, b| {
        b.coefficient
            .cmp(&a.coefficient)
            .then(a.record.rank.cmp(&b.record.rank))
    });

    let used = terms
        .iter()
        .map(|t| t.record.abbreviation.clone())
        .collect();

    Equation {
        terms,
        scale,
        used,
        unrecognized,
        value: OnceCell::new(),
    }
}
