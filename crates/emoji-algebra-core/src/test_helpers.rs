//! Shared fixtures for unit tests.
//!
//! Vectors are built from a few basis directions so the nearest record for
//! each recipe is known in advance:
//!
//! | rank | abbr | vector | notes |
//! |------|------|--------|-------|
//! | 0 | hec | e0 + e1 | |
//! | 1 | cat | e0 | |
//! | 2 | hrt | e1 + 0.1 e2 | nearest to `hec - cat` |
//! | 3 | dog | e3 | |
//! | 4 | ta | e4 | |
//! | 5 | m | e5 | |
//! | 6 | pty | (e4 + e5) / 3 | nearest to `(ta + m) / 3` |
//! | 7 | flfr | e1 | flag, never matchable |
//! | -1 | uni | e6 | unranked, never matchable |

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::catalog::{EmojiCatalog, RawEmoji};
use crate::config::CatalogConfig;
use crate::vector::DEFAULT_DIMENSION;

/// Truncate and base64 each component the way the dataset generator does.
pub(crate) fn pack(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| BASE64.encode(&v.to_be_bytes()[..3]))
        .collect()
}

/// A `DEFAULT_DIMENSION` vector with the given non-zero components.
pub(crate) fn basis(entries: &[(usize, f32)]) -> Vec<f32> {
    let mut v = vec![0.0; DEFAULT_DIMENSION];
    for &(i, x) in entries {
        v[i] = x;
    }
    v
}

pub(crate) fn raw(name: &str, rank: i32, abbr: &str, glyph: &str, values: &[f32]) -> RawEmoji {
    RawEmoji {
        name: name.to_string(),
        rank,
        abbreviation: abbr.to_string(),
        glyph: glyph.to_string(),
        encoded_vector: pack(values),
    }
}

/// Fixture records in name order, as the dataset file lists them.
pub(crate) fn fixture_raw() -> Vec<RawEmoji> {
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

pub(crate) fn fixture_catalog() -> EmojiCatalog {
    EmojiCatalog::load(fixture_raw(), &CatalogConfig::default()).expect("fixture catalog loads")
}
