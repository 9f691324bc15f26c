//! Nearest-neighbour benchmark suite
//!
//! Evaluation is an exhaustive scan of the matchable subset, so cost grows
//! linearly with catalog size. A full-size catalog (258 matchable records at
//! 300 dimensions) should evaluate well under a millisecond.
//!
//! Run with:
//! - `cargo bench -p emoji-algebra-core --bench nearest_bench`

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use emoji_algebra_core::{
    codec, CatalogConfig, EmojiCatalog, EquationBuilder, Evaluator, RawEmoji, DEFAULT_DIMENSION,
};

// =============================================================================
// Helper Functions: Deterministic Data Generation
// =============================================================================

/// Deterministic pseudo-embedding for record `seed`.
fn generate_embedding(dim: usize, seed: u64) -> Vec<f32> {
    (0..dim)
        .map(|i| ((i as f64 + seed as f64 * 13.0) * 0.1).sin() as f32)
        .collect()
}

fn pack(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| BASE64.encode(&v.to_be_bytes()[..3]))
        .collect()
}

fn generate_catalog(count: usize) -> EmojiCatalog {
    let raw: Vec<RawEmoji> = (0..count)
        .map(|i| RawEmoji {
            name: format!("emoji_{}", i),
            rank: i as i32,
            abbreviation: format!("e{}", i),
            glyph: "?".to_string(),
            encoded_vector: pack(&generate_embedding(DEFAULT_DIMENSION, i as u64)),
        })
        .collect();
    EmojiCatalog::load(raw, &CatalogConfig::default()).expect("benchmark catalog loads")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let encoded = pack(&generate_embedding(DEFAULT_DIMENSION, 7));
    c.bench_function("decode_300d", |b| {
        b.iter(|| codec::decode(black_box(&encoded)))
    });
}

/// Full catalog: parse, value and nearest for a typical three-term recipe.
fn bench_evaluate_full_catalog(c: &mut Criterion) {
    let catalog = generate_catalog(258);
    let builder = EquationBuilder::new(&catalog);
    let evaluator = Evaluator::new(&catalog);

    c.bench_function("evaluate_258_records_300d", |b| {
        b.iter(|| {
            let equation = builder.parse(black_box("e12 e40 e40 e7"));
            evaluator.evaluate(&equation)
        })
    });
}

fn bench_nearest_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_scaling");

    for size in [16usize, 64, 258] {
        let catalog = generate_catalog(size);
        let builder = EquationBuilder::new(&catalog);
        let evaluator = Evaluator::new(&catalog);
        let equation = builder.parse("e0 e1 e1 e2 2");
        // Warm the cached value so only the scan is measured.
        let _ = equation.value();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| evaluator.nearest(black_box(&equation)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode,
    bench_evaluate_full_catalog,
    bench_nearest_scaling
);
criterion_main!(benches);
