//! Latency benchmarks for the scoring engine
//!
//! The keyword path should stay inside the Tier A budget (<2ms) for typical
//! pitch-sized inputs.
//!
//! Run with: cargo bench -p investiguard-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;

use investiguard_classifiers::{PatternTables, RiskEngine};

fn benchmark_pattern_scan(c: &mut Criterion) {
    let tables = PatternTables::new().expect("Failed to build pattern tables");

    let test_cases = vec![
        ("empty", String::new()),
        ("short_clean", "Index funds track the market.".to_string()),
        (
            "short_pitch",
            "Guaranteed returns! Double your money with no risk.".to_string(),
        ),
        (
            "long_mixed",
            "A diversified portfolio and thorough research beat any secret strategy. ".repeat(50),
        ),
    ];

    let mut group = c.benchmark_group("Pattern_Scan");
    for (name, text) in &test_cases {
        group.bench_with_input(BenchmarkId::new("scan", name), text, |b, text| {
            b.iter(|| tables.scan(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_engine_score(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let engine = RiskEngine::with_keyword_sentiment().expect("Failed to build engine");
    let text = "This is a guaranteed investment opportunity with no risk and double your money in 30 days!";

    let mut group = c.benchmark_group("Engine_Tier_A");
    group.sample_size(100);
    group.bench_function("score_keyword", |b| {
        b.iter(|| rt.block_on(async { engine.score(black_box(text)).await }))
    });
    group.bench_function("score_with_signal", |b| {
        b.iter(|| engine.score_with_signal(black_box(text), 0.5))
    });
    group.finish();
}

criterion_group!(benches, benchmark_pattern_scan, benchmark_engine_score);
criterion_main!(benches);
