//! Criterion micro-benchmarks for the container's append, insert,
//! remove, and clone paths, with `std::vec::Vec` and `SmallVec` as
//! baselines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadvec::QuadVec;
use quadvec_bench::{filled, insert_positions, remove_positions};
use smallvec::SmallVec;

/// Benchmark: append 10K sequential values into each container kind.
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("quadvec_push_10k", |b| {
        b.iter(|| {
            let mut v = QuadVec::new();
            for i in 0..10_000i64 {
                v.push(i).unwrap();
            }
            black_box(v.len());
        });
    });

    c.bench_function("std_vec_push_10k", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..10_000i64 {
                v.push(i);
            }
            black_box(v.len());
        });
    });

    c.bench_function("smallvec_push_10k", |b| {
        b.iter(|| {
            let mut v: SmallVec<[i64; 16]> = SmallVec::new();
            for i in 0..10_000i64 {
                v.push(i);
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: worst-case insertion — every element lands at the front,
/// shifting the whole suffix each time.
fn bench_front_insert_1k(c: &mut Criterion) {
    c.bench_function("quadvec_front_insert_1k", |b| {
        b.iter(|| {
            let mut v = QuadVec::new();
            for i in 0..1_000i64 {
                v.insert(0, i).unwrap();
            }
            black_box(v.len());
        });
    });

    c.bench_function("std_vec_front_insert_1k", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..1_000i64 {
                v.insert(0, i);
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: seeded random-position churn — grow by insertion, then
/// shrink back to empty by removal.
fn bench_random_churn_1k(c: &mut Criterion) {
    let inserts = insert_positions(1_000, 42);
    let removes = remove_positions(1_000, 42);

    c.bench_function("quadvec_random_churn_1k", |b| {
        b.iter(|| {
            let mut v = QuadVec::new();
            for (i, &pos) in inserts.iter().enumerate() {
                v.insert(pos, i as i64).unwrap();
            }
            for &pos in &removes {
                v.remove(pos).unwrap();
            }
            black_box(v.is_empty());
        });
    });

    c.bench_function("std_vec_random_churn_1k", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for (i, &pos) in inserts.iter().enumerate() {
                v.insert(pos, i as i64);
            }
            for &pos in &removes {
                v.remove(pos);
            }
            black_box(v.is_empty());
        });
    });
}

/// Benchmark: deep copy plus teardown of a 10K-element container.
fn bench_clone_drop_10k(c: &mut Criterion) {
    let v = filled(10_000);

    c.bench_function("quadvec_clone_drop_10k", |b| {
        b.iter(|| {
            let copy = v.clone();
            black_box(copy.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_front_insert_1k,
    bench_random_churn_1k,
    bench_clone_drop_10k
);
criterion_main!(benches);
