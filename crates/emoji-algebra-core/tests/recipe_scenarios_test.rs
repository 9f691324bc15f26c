//! End-to-end recipe scenarios: catalog file on disk, config from TOML,
//! parse, evaluate and explore.

mod common;

use std::io::Write;

use emoji_algebra_core::{
    explore, AlgebraConfig, AlgebraError, EmojiCatalog, EquationBuilder, Evaluator,
};
use tempfile::NamedTempFile;

use common::{basis, fixture_raw, raw, write_catalog};

fn load_fixture() -> EmojiCatalog {
    let file = write_catalog(&fixture_raw());
    EmojiCatalog::from_file(file.path(), &AlgebraConfig::default().catalog).expect("load catalog")
}

#[test]
fn test_scenario_hec_minus_cat() {
    let catalog = load_fixture();
    let equation = EquationBuilder::new(&catalog).parse("hec cat cat");
    let evaluation = Evaluator::new(&catalog).evaluate(&equation).expect("evaluate");

    assert_eq!(equation.to_string(), "😻 - 🐱");
    assert_eq!(evaluation.nearest.abbreviation, "hrt");
    assert_eq!(evaluation.efficiency, 91);
    assert_eq!(format!("{} {}", equation, evaluation), "😻 - 🐱 = ❤ hrt 0.10");
}

#[test]
fn test_scenario_scaled_average() {
    let catalog = load_fixture();
    let equation = EquationBuilder::new(&catalog).parse("TA m 3");
    let evaluation = Evaluator::new(&catalog).evaluate(&equation).expect("evaluate");

    assert_eq!(equation.scale(), 3);
    assert_eq!(evaluation.nearest.abbreviation, "pty");
    assert_eq!(evaluation.efficiency, 84);
}

#[test]
fn test_scenario_single_term_never_returns_itself() {
    let catalog = load_fixture();
    let builder = EquationBuilder::new(&catalog);
    let evaluator = Evaluator::new(&catalog);
    for record in catalog.matchable_subset() {
        let equation = builder.parse(&record.abbreviation);
        let nearest = evaluator.nearest(&equation).expect("nearest");
        assert_ne!(nearest.abbreviation, record.abbreviation);
    }
}

#[test]
fn test_scenario_unknown_input_is_empty_state() {
    let catalog = load_fixture();
    let equation = EquationBuilder::new(&catalog).parse("hello world");
    assert!(equation.is_empty());
    assert_eq!(equation.to_string(), "");
    assert!(matches!(
        Evaluator::new(&catalog).evaluate(&equation),
        Err(AlgebraError::EmptyEquation)
    ));
}

#[test]
fn test_scenario_config_file_changes_matchable_subset() {
    let mut config_file = NamedTempFile::new().expect("tempfile");
    config_file
        .write_all(b"[catalog]\nmax_rank = 3\nexcluded_name_prefix = \"\"\n")
        .expect("write config");
    let config = AlgebraConfig::from_file(config_file.path()).expect("config");

    let file = write_catalog(&fixture_raw());
    let catalog = EmojiCatalog::from_file(file.path(), &config.catalog).expect("load");
    let subset: Vec<&str> = catalog
        .matchable_subset()
        .map(|r| r.abbreviation.as_str())
        .collect();
    assert_eq!(subset, vec!["hec", "cat", "hrt"]);
}

#[test]
fn test_scenario_corrupt_catalog_file() {
    let mut records = fixture_raw();
    records.push(raw("broken", 9, "brk", "x", &basis(&[(0, 1.0)])[..10]));
    let file = write_catalog(&records);

    let err = EmojiCatalog::from_file(file.path(), &AlgebraConfig::default().catalog)
        .unwrap_err();
    assert!(matches!(err, AlgebraError::CorruptData { index: 9, .. }));
    assert!(err.is_corruption());
}

#[test]
fn test_scenario_exploration_reaches_fixture() {
    let catalog = load_fixture();
    let mut config = AlgebraConfig::default();
    config.explore.seed_count = 2;

    let result = explore(&catalog, &config.explore).expect("explore");
    assert!(result.complete);
    assert_eq!(result.seed_count(), 2);
    assert_eq!(
        result.discovered.len() + result.missed.len(),
        catalog.matchable_len()
    );
    let json = serde_json::to_value(&result).expect("serialize");
    assert!(json["edges"].as_array().is_some_and(|e| !e.is_empty()));
}
