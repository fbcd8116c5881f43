//! Benchmarks for the deduplicating sampler.
//!
//! Covers the fast path (enough unused items), the refill path (pool
//! exhausted) and a full service call including seed resolution.

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use icebreaker::services::deduplication::sample;
use icebreaker::services::generator;
use icebreaker::{DedupKey, InMemoryUsedSetStore, Mode, PromptRequest, PromptService, Session};
use std::hint::black_box;

fn make_pool(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("prompt number {i}")).collect()
}

fn bench_fresh_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_fresh");
    for size in [36, 1_000, 10_000] {
        let pool = make_pool(size);
        let key = DedupKey::from("bench:fresh");
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| {
                let mut store = InMemoryUsedSetStore::new();
                let mut rng = generator(Some(42));
                black_box(sample(pool, 3, &mut rng, &key, &mut store))
            });
        });
    }
    group.finish();
}

fn bench_exhausted_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_exhausted");
    for size in [36, 1_000] {
        let pool = make_pool(size);
        let key = DedupKey::from("bench:exhausted");
        let mut drained = InMemoryUsedSetStore::new();
        sample(&pool, size, &mut generator(Some(1)), &key, &mut drained);

        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| {
                let mut store = drained.clone();
                let mut rng = generator(Some(42));
                black_box(sample(pool, 3, &mut rng, &key, &mut store))
            });
        });
    }
    group.finish();
}

fn bench_service(c: &mut Criterion) {
    let service = PromptService::new();
    c.bench_function("service_seeded_batch", |b| {
        b.iter(|| {
            let mut session = Session::new();
            let request = PromptRequest::new(Mode::Aa36, "beginner").with_seed("benchmark");
            black_box(service.sample_prompts(&mut session, request))
        });
    });
}

criterion_group!(benches, bench_fresh_pool, bench_exhausted_pool, bench_service);
criterion_main!(benches);
