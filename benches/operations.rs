//! Benchmarks for the windowed-scan operations
//!
//! All scans are brute-force O(n·k) passes; these benchmarks track how
//! they scale with sequence length and compare the scalar and parallel
//! approximate scanners.
//!
//! Run with: cargo bench --bench operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nucleoscan::{
    count_pattern, frequency_map, skew, ApproximateScanner, Genome, Topology,
};

/// Generate a deterministic pseudo-random DNA sequence
fn generate_sequence(len: usize) -> String {
    let mut state = 0x2545F4914F6CDD1Du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ['A', 'C', 'G', 'T'][(state % 4) as usize]
        })
        .collect()
}

fn bench_count_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_pattern");

    for size in [1_000, 10_000, 100_000, 1_000_000].iter() {
        let sequence = generate_sequence(*size);
        let genome = Genome::new(Topology::Linear, &sequence).unwrap();

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| count_pattern(black_box(&genome), black_box("ATGCATGC")))
        });
    }

    group.finish();
}

fn bench_approximate_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("approximate_scan");

    let sequence = generate_sequence(1_000_000);
    let genome = Genome::new(Topology::Linear, &sequence).unwrap();
    let scalar = ApproximateScanner::new();
    let parallel = ApproximateScanner::with_parallel(4);

    group.throughput(Throughput::Bytes(sequence.len() as u64));
    group.bench_function("scalar", |b| {
        b.iter(|| scalar.scan(black_box(&genome), black_box("ATGCATGC"), 2))
    });
    group.bench_function("parallel_4t", |b| {
        b.iter(|| parallel.scan(black_box(&genome), black_box("ATGCATGC"), 2))
    });

    group.finish();
}

fn bench_frequency_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_map");

    for size in [1_000, 10_000, 100_000].iter() {
        let text = generate_sequence(*size);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| frequency_map(black_box(&text), black_box(9)))
        });
    }

    group.finish();
}

fn bench_skew(c: &mut Criterion) {
    let mut group = c.benchmark_group("skew");

    for size in [10_000, 1_000_000].iter() {
        let sequence = generate_sequence(*size);
        let genome = Genome::new(Topology::Linear, &sequence).unwrap();

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| skew(black_box(&genome)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_count_pattern,
    bench_approximate_scan,
    bench_frequency_map,
    bench_skew
);
criterion_main!(benches);
