use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use chaintable::table::ChainedTable;
use rand::prelude::*;
use std::collections::HashMap;

const BUCKETS: usize = 1024;

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count).map(|_| rng.gen()).collect()
}

fn filled_table(keys: &[u64], capacity: usize) -> ChainedTable<u64, u64> {
    let mut table = ChainedTable::with_capacity(capacity).expect("non-zero capacity");
    for &key in keys {
        table.insert(key, key);
    }
    table
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");

    for size in [1000, 10_000] {
        let keys = random_keys(size);

        // one bucket per key keeps chains short
        group.bench_with_input(BenchmarkId::new("ChainedTable", size), &keys, |b, keys| {
            b.iter(|| black_box(filled_table(keys, keys.len())));
        });

        group.bench_with_input(BenchmarkId::new("HashMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = HashMap::new();
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

/// Lookup cost as chains grow in a table with a fixed bucket count
fn bench_lookup_by_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_hit_by_load");

    for load in [1, 8, 64] {
        let keys = random_keys(BUCKETS * load);
        let table = filled_table(&keys, BUCKETS);

        group.bench_with_input(BenchmarkId::new("ChainedTable", load), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(table.get(key));
                }
            });
        });
    }

    group.finish();
}

fn bench_lookup_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_miss");

    for size in [1000, 10_000] {
        let table = filled_table(&(0..size as u64).collect::<Vec<_>>(), BUCKETS);
        let map: HashMap<u64, u64> = (0..size as u64).map(|i| (i, i)).collect();
        let miss_start = size as u64;

        group.bench_with_input(BenchmarkId::new("ChainedTable", size), &size, |b, &size| {
            b.iter(|| {
                for i in 0..size as u64 {
                    black_box(table.get(&(miss_start + i)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |b, &size| {
            b.iter(|| {
                for i in 0..size as u64 {
                    black_box(map.get(&(miss_start + i)));
                }
            });
        });
    }

    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_80_read_20_write");
    let size = 10_000u64;
    let mut rng = StdRng::seed_from_u64(7);

    let operations: Vec<(bool, u64)> = (0..size)
        .map(|_| (rng.gen_ratio(80, 100), rng.gen_range(0..size)))
        .collect();

    group.bench_function("ChainedTable", |b| {
        b.iter(|| {
            let mut table = ChainedTable::with_capacity(BUCKETS).expect("non-zero capacity");
            for &(is_read, key) in &operations {
                if is_read {
                    black_box(table.get(&key));
                } else {
                    table.insert(key, key);
                }
            }
            black_box(table)
        });
    });

    group.bench_function("HashMap", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for &(is_read, key) in &operations {
                if is_read {
                    black_box(map.get(&key));
                } else {
                    map.insert(key, key);
                }
            }
            black_box(map)
        });
    });

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in [1000, 10_000] {
        let keys: Vec<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("ChainedTable", size), &keys, |b, keys| {
            b.iter_batched(
                || filled_table(keys, BUCKETS),
                |mut table| {
                    for key in keys {
                        black_box(table.remove(key));
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random,
    bench_lookup_by_load,
    bench_lookup_miss,
    bench_mixed_workload,
    bench_remove,
);

criterion_main!(benches);
