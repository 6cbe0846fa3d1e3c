//! Bit-pattern and decimal conversion benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use strbuf_core::{ascending, to_bits, Buffer, ToDecimal};

/// Benchmark bit-pattern rendering at each width.
fn bench_to_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_bits");

    group.bench_function("u8", |b| {
        b.iter(|| {
            let mut out = Buffer::new();
            to_bits(&mut out, black_box(0xa5u8)).unwrap();
            black_box(out);
        });
    });

    group.bench_function("i32", |b| {
        b.iter(|| {
            let mut out = Buffer::new();
            to_bits(&mut out, black_box(-123_456i32)).unwrap();
            black_box(out);
        });
    });

    group.bench_function("u64", |b| {
        b.iter(|| {
            let mut out = Buffer::new();
            to_bits(&mut out, black_box(u64::MAX / 3)).unwrap();
            black_box(out);
        });
    });

    // Successive conversions prepend, so this grows one buffer.
    group.bench_function("u16_chain_32", |b| {
        b.iter(|| {
            let mut out = Buffer::new();
            for i in 0..32u16 {
                to_bits(&mut out, black_box(i)).unwrap();
            }
            black_box(out);
        });
    });

    group.finish();
}

/// Benchmark decimal rendering.
fn bench_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal");

    group.bench_function("i64", |b| {
        b.iter(|| black_box(black_box(-9_876_543_210i64).to_decimal().unwrap()));
    });

    group.bench_function("u16", |b| {
        b.iter(|| black_box(black_box(65_535u16).to_decimal().unwrap()));
    });

    group.bench_function("f64", |b| {
        b.iter(|| black_box(black_box(std::f64::consts::PI).to_decimal().unwrap()));
    });

    group.finish();
}

/// Benchmark sorting buffers with the ordering predicate.
fn bench_sort(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let lines: Vec<Buffer> = (0..1000)
        .map(|_| rng.gen::<u32>().to_decimal().unwrap())
        .collect();

    c.bench_function("sort_1000_ascending", |b| {
        b.iter(|| {
            let mut sorted: Vec<Buffer> = lines.clone();
            sorted.sort_by(ascending);
            black_box(sorted);
        });
    });
}

criterion_group!(benches, bench_to_bits, bench_decimal, bench_sort);

criterion_main!(benches);
