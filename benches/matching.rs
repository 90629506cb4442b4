//! Benchmarks for the phase 1 engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- run_phase1
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    Criterion, BenchmarkId, Throughput, BatchSize
};
use std::time::Duration;

use stable_roommates::{EngineConfig, MatchingEngine, PreferenceTable};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic instance generation
// ============================================================================

/// Complete instance: everyone ranks everyone else in seeded random order.
fn complete_instance(participants: u32, seed: u64) -> Vec<(u32, Vec<u32>)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..participants)
        .map(|person| {
            let mut others: Vec<u32> = (0..participants).filter(|&o| o != person).collect();
            others.shuffle(&mut rng);
            (person, others)
        })
        .collect()
}

/// Instance where every list follows the same global ranking, so the
/// proposal sequence produces as many displacements as possible.
fn master_list_instance(participants: u32) -> Vec<(u32, Vec<u32>)> {
    (0..participants)
        .map(|person| (person, (0..participants).filter(|&o| o != person).collect()))
        .collect()
}

// ============================================================================
// BENCHMARK: Full phase 1 run
// ============================================================================

fn bench_run_phase1(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_phase1");
    group.measurement_time(Duration::from_secs(10));

    for &size in &[16u32, 64, 256] {
        let table = PreferenceTable::new(complete_instance(size, 42)).unwrap();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), &table, |b, table| {
            b.iter_batched(
                || MatchingEngine::from_table(table.clone(), EngineConfig::default()),
                |mut engine| black_box(engine.run_phase1()),
                BatchSize::SmallInput,
            );
        });

        let table = PreferenceTable::new(master_list_instance(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("master_list", size), &table, |b, table| {
            b.iter_batched(
                || MatchingEngine::from_table(table.clone(), EngineConfig::default()),
                |mut engine| black_box(engine.run_phase1()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Table construction
// ============================================================================

fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_table");

    for &size in &[64u32, 256] {
        let preferences = complete_instance(size, 7);
        group.throughput(Throughput::Elements(size as u64 * (size as u64 - 1)));

        group.bench_with_input(BenchmarkId::from_parameter(size), &preferences, |b, prefs| {
            b.iter_batched(
                || prefs.clone(),
                |prefs| black_box(PreferenceTable::new(prefs).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Single proposal
// ============================================================================

fn bench_single_proposal(c: &mut Criterion) {
    let table = PreferenceTable::new(complete_instance(256, 1)).unwrap();
    let target = *table.participant(table.first_remaining(0).unwrap());

    c.bench_function("single_proposal", |b| {
        b.iter_batched(
            || MatchingEngine::from_table(table.clone(), EngineConfig::default()),
            |mut engine| black_box(engine.propose(&0, &target)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_run_phase1, bench_build_table, bench_single_proposal);
criterion_main!(benches);
