//! Emoji catalog: the ordered, read-only collection of emoji records.
//!
//! Built once from raw records (already-parsed JSON), decoding every vector
//! up front. Nothing mutates the catalog after construction, so a single
//! instance can be shared by any number of concurrent evaluations.
//!
//! # Matchable Subset
//!
//! Records with `0 <= rank < max_rank` whose name does not start with the
//! excluded prefix (`flag_` by default), sorted ascending by rank. Only these
//! records are returned by nearest-neighbour search.


use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::codec::TruncatedFloatCodec;
use crate::config::{CatalogConfig, CorruptPolicy};
use crate::error::{AlgebraError, AlgebraResult};
use crate::vector::Vector;

/// One emoji entry as it appears in the catalog JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEmoji {
    pub name: String,
    /// `-1` means "not in the standard ranked set".
    pub rank: i32,
    #[serde(rename = "abbr")]
    pub abbreviation: String,
    #[serde(rename = "char")]
    pub glyph: String,
    /// Base64 truncated-float vector, `4 * dimension` characters.
    #[serde(rename = "vec")]
    pub encoded_vector: String,
}

/// A decoded emoji record owned by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiRecord {
    pub name: String,
    pub rank: i32,
    pub abbreviation: String,
    pub glyph: String,
    pub vector: Vector,
}

/// Ordered collection of emoji records with abbreviation lookup.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    /// Records in load order
    records: Vec<EmojiRecord>,
    /// Abbreviation -> index into `records`
    by_abbreviation: HashMap<String, usize>,
    /// Matchable record indices, ascending by rank
    matchable: Vec<usize>,
    /// Parallel to `records`
    matchable_mask: Vec<bool>,
    dimension: usize,
    terms_from_matchable_only: bool,
}

impl EmojiCatalog {
    /// Build a catalog from raw records, decoding every vector.
    ///
    /// # Errors
    /// - `ConfigError` if `config` is invalid
    /// - `CorruptData { index, reason }` for an undecodable vector when
    ///   `on_corrupt` is `Abort` (`index` is the position in `raw`)
    /// - `DuplicateAbbreviation` if two records share an abbreviation
    pub fn load(raw: Vec<RawEmoji>, config: &CatalogConfig) -> AlgebraResult<Self> {
        config
            .validate()
            .map_err(|message| AlgebraError::ConfigError { message })?;

        let codec = TruncatedFloatCodec::new(config.dimension);
        let total = raw.len();

        let mut records = Vec::with_capacity(total);
        let mut by_abbreviation = HashMap::with_capacity(total);
        let mut skipped = 0usize;

        for (index, entry) in raw.into_iter().enumerate() {
            let vector = match codec.decode(&entry.encoded_vector) {
                Ok(v) => v,
                Err(e) => match config.on_corrupt {
                    CorruptPolicy::Abort => {
                        return Err(AlgebraError::CorruptData {
                            index,
                            reason: e.to_string(),
                        });
                    }
                    CorruptPolicy::Skip => {
                        warn!(
                            target: "catalog",
                            index,
                            abbreviation = %entry.abbreviation,
                            error = %e,
                            "Skipping record with corrupt vector"
                        );
                        skipped += 1;
                        continue;
                    }
                },
            };

            if by_abbreviation.contains_key(&entry.abbreviation) {
                return Err(AlgebraError::DuplicateAbbreviation {
                    abbreviation: entry.abbreviation,
                    index,
                });
            }
            by_abbreviation.insert(entry.abbreviation.clone(), records.len());

            records.push(EmojiRecord {
                name: entry.name,
                rank: entry.rank,
                abbreviation: entry.abbreviation,
                glyph: entry.glyph,
                vector,
            });
        }

        let matchable_mask: Vec<bool> = records
            .iter()
            .map(|r| config.is_matchable(&r.name, r.rank))
            .collect();

        let mut matchable: Vec<usize> = (0..records.len())
            .filter(|&i| matchable_mask[i])
            .collect();
        // Stable: equal ranks keep load order.
        matchable.sort_by_key(|&i| records[i].rank);

        info!(
            target: "catalog",
            total,
            loaded = records.len(),
            skipped,
            matchable = matchable.len(),
            "Emoji catalog loaded"
        );

        Ok(Self {
            records,
            by_abbreviation,
            matchable,
            matchable_mask,
            dimension: config.dimension,
            terms_from_matchable_only: config.terms_from_matchable_only,
        })
    }

    /// Parse a JSON array of [`RawEmoji`] and build the catalog.
    ///
    /// # Errors
    /// - `SerializationError` if the JSON is malformed
    /// - anything [`EmojiCatalog::load`] returns
    pub fn from_json_str(json: &str, config: &CatalogConfig) -> AlgebraResult<Self> {
        let raw: Vec<RawEmoji> =
            serde_json::from_str(json).map_err(|e| AlgebraError::SerializationError {
                message: format!("Failed to parse emoji catalog JSON: {}", e),
            })?;
        debug!(target: "catalog", records = raw.len(), "Parsed catalog JSON");
        Self::load(raw, config)
    }

    /// Read and load a catalog JSON file.
    ///
    /// # Errors
    /// - `IoError` if the file cannot be read
    /// - anything [`EmojiCatalog::from_json_str`] returns
    pub fn from_file(path: impl AsRef<Path>, config: &CatalogConfig) -> AlgebraResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        debug!(target: "catalog", path = %path.display(), bytes = contents.len(), "Read catalog file");
        Self::from_json_str(&contents, config)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dimension shared by every record's vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All records in load order.
    #[inline]
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Look up any record by its abbreviation.
    #[inline]
    pub fn lookup_by_abbreviation(&self, abbreviation: &str) -> Option<&EmojiRecord> {
        self.by_abbreviation
            .get(abbreviation)
            .map(|&i| &self.records[i])
    }

    /// Look up a record usable as a recipe term.
    ///
    /// With `terms_from_matchable_only` set, records outside the matchable
    /// subset are treated as unknown.
    pub fn lookup_term(&self, abbreviation: &str) -> Option<&EmojiRecord> {
        let &i = self.by_abbreviation.get(abbreviation)?;
        if self.terms_from_matchable_only && !self.matchable_mask[i] {
            return None;
        }
        Some(&self.records[i])
    }

    /// Records eligible for matching, ascending by rank.
    pub fn matchable_subset(&self) -> impl ExactSizeIterator<Item = &EmojiRecord> + '_ {
        self.matchable.iter().map(move |&i| &self.records[i])
    }

    #[inline]
    pub fn matchable_len(&self) -> usize {
        self.matchable.len()
    }

    /// Whether the record with this abbreviation is in the matchable subset.
    pub fn is_matchable(&self, abbreviation: &str) -> bool {
        self.by_abbreviation
            .get(abbreviation)
            .is_some_and(|&i| self.matchable_mask[i])
    }
}
