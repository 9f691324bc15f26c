//! Emoji Embedding Algebra
//!
//! Type a recipe of emoji abbreviations (`"hec cat cat"`), combine their
//! word-embedding vectors with signed integer weights, and find the closest
//! emoji to the result.
//!
//! # Architecture
//!
//! - **codec**: Truncated-float base64 vector decoder
//! - **vector**: Fixed-dimension `f32` vectors with in-place arithmetic
//! - **catalog**: Decoded emoji records, abbreviation lookup, matchable subset
//! - **equation**: Recipe text to weighted terms plus a scale divisor
//! - **evaluator**: Equation value, nearest-neighbour search, efficiency score
//! - **explore**: Breadth-first search over one- and two-term recipes
//! - **config**: TOML configuration with environment overrides
//! - **error**: Comprehensive error handling with AlgebraError
//!
//! The catalog is built once and never mutated; builders and evaluators
//! borrow it explicitly.
//!
//! # Example
//!
//! ```
//! use emoji_algebra_core::config::CatalogConfig;
//! use emoji_algebra_core::error::AlgebraResult;
//! use emoji_algebra_core::{EmojiCatalog, EquationBuilder};
//!
//! fn example() -> AlgebraResult<()> {
//!     let catalog = EmojiCatalog::load(Vec::new(), &CatalogConfig::default())?;
//!     let equation = EquationBuilder::new(&catalog).parse("hec cat cat");
//!     assert!(equation.is_empty());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod codec;
pub mod config;
pub mod equation;
pub mod error;
pub mod evaluator;
pub mod explore;
pub mod vector;

#[cfg(test)]
mod test_helpers;

// Re-exports for convenience
pub use catalog::{EmojiCatalog, EmojiRecord, RawEmoji};
pub use codec::{CodecError, TruncatedFloatCodec};
pub use config::{AlgebraConfig, CatalogConfig, CorruptPolicy, ExploreConfig};
pub use equation::{Equation, EquationBuilder, EquationTerm, TokenClass};
pub use error::{AlgebraError, AlgebraResult};
pub use evaluator::{efficiency_score, Evaluation, Evaluator};
pub use explore::{explore, Discovery, Exploration, ExploreEdge};
pub use vector::{Vector, DEFAULT_DIMENSION};
