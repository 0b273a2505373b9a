//! Matching hot-path benchmarks.
//!
//! Run with `cargo bench`; results land in `target/criterion/`.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use matching_engine::{MatchingEngine, OrderBook, OrderPool};
use types::{OrderId, Price, Quantity, Side};

fn engine_with_capacity(capacity: usize) -> MatchingEngine {
    let pool = Arc::new(OrderPool::with_capacity(capacity));
    MatchingEngine::new(Arc::new(OrderBook::new(pool)))
}

/// Ladder of resting asks starting at `base` with one-tick spacing.
fn seed_asks(engine: &MatchingEngine, count: u64, base: i64) {
    for i in 0..count {
        engine
            .process_order(
                OrderId::new(i + 1),
                Side::Sell,
                Price::from_ticks(base + i as i64),
                Quantity::new(100),
            )
            .unwrap();
    }
}

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_match");

    group.bench_function("against_1k_asks", |b| {
        b.iter_batched(
            || {
                let engine = engine_with_capacity(4096);
                seed_asks(&engine, 1000, 10000);
                engine
            },
            |engine| {
                black_box(
                    engine
                        .process_order(
                            OrderId::new(999_999),
                            Side::Buy,
                            Price::from_ticks(10000),
                            Quantity::new(100),
                        )
                        .unwrap(),
                )
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("sweep_ten_levels", |b| {
        b.iter_batched(
            || {
                let engine = engine_with_capacity(4096);
                seed_asks(&engine, 100, 10000);
                engine
            },
            |engine| {
                black_box(
                    engine
                        .process_order(
                            OrderId::new(999_999),
                            Side::Buy,
                            Price::from_ticks(10009),
                            Quantity::new(1000),
                        )
                        .unwrap(),
                )
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("no_match_rests", |b| {
        b.iter_batched(
            || {
                let engine = engine_with_capacity(4096);
                seed_asks(&engine, 1000, 10000);
                engine
            },
            |engine| {
                black_box(
                    engine
                        .process_order(
                            OrderId::new(999_999),
                            Side::Buy,
                            Price::from_ticks(9000),
                            Quantity::new(100),
                        )
                        .unwrap(),
                )
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_cancel(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancel");

    group.bench_function("cancel_mid_book", |b| {
        b.iter_batched(
            || {
                let engine = engine_with_capacity(4096);
                seed_asks(&engine, 1000, 10000);
                engine
            },
            |engine| black_box(engine.cancel_order(OrderId::new(500))),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.sample_size(30);

    for batch in [1_000u64, 10_000] {
        group.throughput(Throughput::Elements(batch));
        group.bench_function(format!("mixed_{batch}_orders"), |b| {
            b.iter_batched(
                || engine_with_capacity(2 * batch as usize),
                |engine| {
                    // Deterministic mix: alternating sides, prices cycling
                    // through a narrow band so roughly half the flow crosses.
                    for i in 0..batch {
                        let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                        let price = Price::from_ticks(10000 + (i % 7) as i64 - 3);
                        let _ = black_box(engine.process_order(
                            OrderId::new(i + 1),
                            side,
                            price,
                            Quantity::new(10),
                        ));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_match, bench_cancel, bench_throughput);
criterion_main!(benches);
