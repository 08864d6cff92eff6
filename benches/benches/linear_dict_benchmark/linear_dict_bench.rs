use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use probedict::{LinearDict, StdHash};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use rustc_hash::FxHashMap;

const SIZES: &[usize] = &[256, 1_024, 8_192, 65_536];
const LOOKUP_N: usize = 8_192;
const CHURN_N: usize = 4_096;
const CHURN_WAVE: usize = 512;

/// Slots needed so that `n` entries never trigger growth.
fn presized(n: usize) -> isize {
    (n * 3 / 2 + 1) as isize
}

fn filled(n: usize) -> LinearDict<u64, u64> {
    (0..n as u64).map(|i| (i, i)).collect()
}

fn bench_insert_with_rehash(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_dict/insert_growing");

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut d: LinearDict<u64, u64> = LinearDict::new();
                for i in 0..n as u64 {
                    d.put(black_box(i), black_box(i));
                }
                black_box(d)
            });
        });
    }

    group.finish();
}

fn bench_insert_presized(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_dict/insert_presized");

    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut d: LinearDict<u64, u64> =
                    LinearDict::with_capacity(presized(n)).expect("non-negative capacity");
                for i in 0..n as u64 {
                    d.put(black_box(i), black_box(i));
                }
                black_box(d)
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_dict/lookup");
    group.throughput(Throughput::Elements(LOOKUP_N as u64));

    let d = filled(LOOKUP_N);
    let mut rng = SmallRng::seed_from_u64(42);
    let mut hits: Vec<u64> = (0..LOOKUP_N as u64).collect();
    hits.shuffle(&mut rng);
    let misses: Vec<u64> = (0..LOOKUP_N)
        .map(|_| rng.gen_range(LOOKUP_N as u64..u64::MAX))
        .collect();

    group.bench_function("hit", |b| {
        b.iter(|| {
            for k in &hits {
                black_box(d.get(k));
            }
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            for k in &misses {
                black_box(d.get(k));
            }
        });
    });

    let fx: FxHashMap<u64, u64> = (0..LOOKUP_N as u64).map(|i| (i, i)).collect();
    group.bench_function("fx_hash_map_hit", |b| {
        b.iter(|| {
            for k in &hits {
                black_box(fx.get(k));
            }
        });
    });

    group.finish();
}

fn bench_string_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_dict/string_keys");
    let keys: Vec<String> = (0..LOOKUP_N).map(|i| format!("key:{i}")).collect();

    group.bench_function("key_hash", |b| {
        b.iter(|| {
            let mut d = LinearDict::new();
            for k in &keys {
                d.put(black_box(k.clone()), ());
            }
            black_box(d)
        });
    });

    group.bench_function("std_hash", |b| {
        b.iter(|| {
            let mut d = LinearDict::new();
            for k in &keys {
                d.put(black_box(StdHash(k.clone())), ());
            }
            black_box(d)
        });
    });

    group.finish();
}

/// Remove a wave of keys and put them back, repeatedly. Exercises tombstone
/// reuse on the insertion path.
fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_dict/churn");
    group.throughput(Throughput::Elements((CHURN_WAVE * 2) as u64));

    group.bench_function("remove_reinsert", |b| {
        b.iter_batched(
            || filled(CHURN_N),
            |mut d| {
                for wave in 0..(CHURN_N / CHURN_WAVE) as u64 {
                    let base = wave * CHURN_WAVE as u64;
                    for k in base..base + CHURN_WAVE as u64 {
                        d.remove(&k);
                    }
                    for k in base..base + CHURN_WAVE as u64 {
                        d.put(k, k);
                    }
                }
                black_box(d)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_with_rehash,
    bench_insert_presized,
    bench_lookup,
    bench_string_keys,
    bench_churn
);
criterion_main!(benches);
