//! Error types for emoji algebra operations.
//!
//! # Error Categories
//!
//! | Category | Variants | Recovery Strategy |
//! |----------|----------|-------------------|
//! | Data | CorruptData, DuplicateAbbreviation, SerializationError | Fix or regenerate the catalog |
//! | Evaluation | EmptyEquation, NoCandidates | Render an empty state |
//! | Configuration | ConfigError | Fix configuration |
//! | Infrastructure | IoError | Retry or fix path |
//!
//! Vector dimension mismatch has no variant: it is a programming
//! error and panics at the call site.

use thiserror::Error;

/// Result type alias for emoji algebra operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Comprehensive error type for catalog loading and equation evaluation.
#[derive(Debug, Error)]
pub enum AlgebraError {
    // ========== Data Errors ==========
    /// An encoded vector could not be decoded. Fatal for that record only.
    #[error("Corrupt vector data in record {index}: {reason}")]
    CorruptData { index: usize, reason: String },

    /// Two catalog records share the same abbreviation.
    #[error("Duplicate abbreviation '{abbreviation}' in record {index}")]
    DuplicateAbbreviation { abbreviation: String, index: usize },

    /// Catalog JSON could not be parsed.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    // ========== Evaluation Errors ==========
    /// `value()` or `nearest()` was called on an equation with zero terms.
    #[error("Equation has no terms")]
    EmptyEquation,

    /// Every matchable record was excluded by the equation's own terms.
    #[error("No candidate records left after excluding {excluded} used abbreviations")]
    NoCandidates { excluded: usize },

    // ========== Configuration Errors ==========
    /// Configuration file invalid or out of range.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    // ========== Infrastructure Errors ==========
    /// File I/O error (catalog or config files).
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AlgebraError {
    /// Whether this error means the input data itself is damaged.
    ///
    /// The CLI maps these to its blocking exit code.
    #[inline]
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::CorruptData { .. }
                | Self::DuplicateAbbreviation { .. }
                | Self::SerializationError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_data_display() {
        let err = AlgebraError::CorruptData {
            index: 7,
            reason: "expected 1200 characters, got 12".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("record 7"));
        assert!(msg.contains("1200"));
    }

    #[test]
    fn test_no_candidates_display() {
        let err = AlgebraError::NoCandidates { excluded: 3 };
        assert_eq!(
            err.to_string(),
            "No candidate records left after excluding 3 used abbreviations"
        );
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "emoji.json");
        let err: AlgebraError = io.into();
        assert!(matches!(err, AlgebraError::IoError(_)));
        assert!(!err.is_corruption());
    }

    #[test]
    fn test_is_corruption_classification() {
        assert!(AlgebraError::CorruptData {
            index: 0,
            reason: String::new()
        }
        .is_corruption());
        assert!(AlgebraError::SerializationError {
            message: "eof".into()
        }
        .is_corruption());
        assert!(!AlgebraError::EmptyEquation.is_corruption());
        assert!(!AlgebraError::NoCandidates { excluded: 0 }.is_corruption());
        assert!(!AlgebraError::ConfigError {
            message: "x".into()
        }
        .is_corruption());
    }
}
