//! Criterion micro-benchmarks for append growth and capacity reservation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growvec::GrowVec;

fn bench_push_from_empty(c: &mut Criterion) {
    c.bench_function("push_1k_from_empty", |b| {
        b.iter(|| {
            let mut v = GrowVec::new();
            for i in 0..1000u32 {
                v.push(black_box(i));
            }
            black_box(v.len())
        })
    });
}

fn bench_push_reserved(c: &mut Criterion) {
    c.bench_function("push_1k_reserved", |b| {
        b.iter(|| {
            let mut v = GrowVec::with_capacity(1000);
            for i in 0..1000u32 {
                v.push(black_box(i));
            }
            black_box(v.capacity())
        })
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert_front_256", |b| {
        b.iter(|| {
            let mut v = GrowVec::new();
            for i in 0..256u32 {
                v.insert(0, black_box(i));
            }
            black_box(v.len())
        })
    });
}

criterion_group!(
    benches,
    bench_push_from_empty,
    bench_push_reserved,
    bench_insert_front
);
criterion_main!(benches);
