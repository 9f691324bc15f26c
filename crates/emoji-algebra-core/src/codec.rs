//! Truncated-float vector decoder.
//!
//! Emoji vectors ship as base64 text. Each component is a big-endian IEEE-754
//! `f32` truncated to its top 3 bytes (sign, exponent, and the high mantissa
//! bits), which base64-encodes to exactly 4 characters.
//!
//! # Reconstruction
//!
//! The dropped low byte is restored as `0x7f`, the closest constant
//! approximation of the discarded bits. The dataset was generated assuming
//! this value, so it must not be replaced with zero-fill.
//!
//! ```text
//! "P4AA"  ->  [0x3f, 0x80, 0x00]  ->  [0x3f, 0x80, 0x00, 0x7f]  ->  1.0000076
//! ```
//!
//! Decoding is lossy but deterministic. Encoding happens offline and is not
//! part of this crate.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::trace;

use crate::vector::{Vector, DEFAULT_DIMENSION};

/// Base64 characters per encoded component.
pub const CHARS_PER_COMPONENT: usize = 4;

/// Bytes kept per component after truncation.
pub const BYTES_PER_COMPONENT: usize = 3;

/// Assumed value of the truncated low mantissa byte.
pub const LOW_BYTE_FILL: u8 = 0x7f;

/// Errors specific to decoding an encoded vector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Encoded string length is not `4 * dimension`.
    WrongLength { expected: usize, got: usize },
    /// Input is not valid standard base64.
    InvalidBase64 { reason: String },
    /// Base64 decoded to the wrong number of bytes (e.g. embedded padding).
    WrongByteCount { expected: usize, got: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, got } => {
                write!(f, "expected {} encoded characters, got {}", expected, got)
            }
            Self::InvalidBase64 { reason } => write!(f, "invalid base64: {}", reason),
            Self::WrongByteCount { expected, got } => {
                write!(f, "expected {} decoded bytes, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Decoder for fixed-dimension truncated-float vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncatedFloatCodec {
    dimension: usize,
}

impl Default for TruncatedFloatCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl TruncatedFloatCodec {
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    #[inline]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Required length of an encoded string for this dimension.
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        self.dimension * CHARS_PER_COMPONENT
    }

    /// Decode an encoded string into a vector of `dimension` components.
    ///
    /// # Errors
    ///
    /// - `WrongLength` if `encoded.len() != 4 * dimension`
    /// - `InvalidBase64` if any character is outside the standard alphabet
    /// - `WrongByteCount` if padding inside the string shortens the output
    pub fn decode(&self, encoded: &str) -> Result<Vector, CodecError> {
        if encoded.len() != self.encoded_len() {
            return Err(CodecError::WrongLength {
                expected: self.encoded_len(),
                got: encoded.len(),
            });
        }

        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| CodecError::InvalidBase64 {
                reason: e.to_string(),
            })?;

        let expected_bytes = self.dimension * BYTES_PER_COMPONENT;
        if bytes.len() != expected_bytes {
            return Err(CodecError::WrongByteCount {
                expected: expected_bytes,
                got: bytes.len(),
            });
        }

        let components: Vec<f32> = bytes
            .chunks_exact(BYTES_PER_COMPONENT)
            .map(|chunk| reconstruct([chunk[0], chunk[1], chunk[2]]))
            .collect();

        trace!(
            target: "codec",
            dimension = self.dimension,
            "Decoded truncated-float vector"
        );

        Ok(Vector::new(components))
    }
}

/// Decode with the default 300-dimension codec.
///
/// # Errors
///
/// See [`TruncatedFloatCodec::decode`].
pub fn decode(encoded: &str) -> Result<Vector, CodecError> {
    TruncatedFloatCodec::default().decode(encoded)
}

/// Rebuild a big-endian `f32` from its top three bytes.
#[inline]
fn reconstruct(top: [u8; 3]) -> f32 {
    f32::from_be_bytes([top[0], top[1], top[2], LOW_BYTE_FILL])
}
