//! Shared catalog fixtures for integration tests.
//!
//! Vectors are sums of a few basis directions so each recipe has a known
//! nearest record. Ranks: hec 0, cat 1, hrt 2, dog 3, ta 4, m 5, pty 6,
//! flfr 7 (flag), uni -1 (unranked).

#![allow(dead_code)]

use std::io::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use emoji_algebra_core::{RawEmoji, DEFAULT_DIMENSION};
use tempfile::NamedTempFile;

pub fn pack(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| BASE64.encode(&v.to_be_bytes()[..3]))
        .collect()
}

pub fn basis(entries: &[(usize, f32)]) -> Vec<f32> {
    let mut v = vec![0.0; DEFAULT_DIMENSION];
    for &(i, x) in entries {
        v[i] = x;
    }
    v
}

pub fn raw(name: &str, rank: i32, abbr: &str, glyph: &str, values: &[f32]) -> RawEmoji {
    RawEmoji {
        name: name.to_string(),
        rank,
        abbreviation: abbr.to_string(),
        glyph: glyph.to_string(),
        encoded_vector: pack(values),
    }
}

pub fn fixture_raw() -> Vec<RawEmoji> {
    let third = 1.0 / 3.0;
    vec![
        raw("cat", 1, "cat", "🐱", &basis(&[(0, 1.0)])),
        raw("dog", 3, "dog", "🐶", &basis(&[(3, 1.0)])),
        raw("flag_fr", 7, "flfr", "🇫🇷", &basis(&[(1, 1.0)])),
        raw("heart", 2, "hrt", "❤", &basis(&[(1, 1.0), (2, 0.1)])),
        raw("heart_eyes_cat", 0, "hec", "😻", &basis(&[(0, 1.0), (1, 1.0)])),
        raw("m", 5, "m", "Ⓜ", &basis(&[(5, 1.0)])),
        raw("partying", 6, "pty", "🥳", &basis(&[(4, third), (5, third)])),
        raw("tada", 4, "ta", "🎉", &basis(&[(4, 1.0)])),
        raw("unicorn", -1, "uni", "🦄", &basis(&[(6, 1.0)])),
    ]
}

/// Write records as catalog JSON to a temp file kept alive by the caller.
pub fn write_catalog(records: &[RawEmoji]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    let json = serde_json::to_string(records).expect("serialize catalog");
    file.write_all(json.as_bytes()).expect("write catalog");
    file
}
