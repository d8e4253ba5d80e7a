use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashbrown::HashMap;
use ordered_dict::OrderedDict;

const N: usize = 10_000;

// Positional operations are linear, so they run on a smaller map.
const N_POSITIONAL: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("OrderedDict", N), |b| {
        b.iter(|| {
            let mut dict = OrderedDict::new();
            for i in 0..N as i64 {
                dict.insert(i, i);
            }
            dict
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OrderedDict", N), |b| {
        b.iter(|| {
            let mut dict = OrderedDict::new();
            for &k in &keys {
                dict.insert(k, k);
            }
            dict
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_at_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_at_front");

    group.bench_function(BenchmarkId::new("OrderedDict", N_POSITIONAL), |b| {
        b.iter(|| {
            let mut dict = OrderedDict::new();
            for i in 0..N_POSITIONAL as i64 {
                dict.insert_at(0, i, i);
            }
            dict
        });
    });

    group.finish();
}

// ─── Lookup Benchmarks ──────────────────────────────────────────────────────

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let dict: OrderedDict<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let map: HashMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("OrderedDict", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = dict.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_position_of(c: &mut Criterion) {
    let keys = ordered_keys(N_POSITIONAL);
    let dict: OrderedDict<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let missing: Vec<i64> = keys.iter().map(|&k| -k - 1).collect();

    let mut group = c.benchmark_group("position_of");

    group.bench_function(BenchmarkId::new("present", N_POSITIONAL), |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for &k in &keys {
                if let Some(p) = dict.position_of(&k) {
                    sum = sum.wrapping_add(p);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("absent", N_POSITIONAL), |b| {
        b.iter(|| missing.iter().filter(|&k| dict.position_of(k).is_some()).count());
    });

    group.finish();
}

fn bench_get_index(c: &mut Criterion) {
    let dict: OrderedDict<i64, i64> = random_keys(N).into_iter().map(|k| (k, k)).collect();

    let mut group = c.benchmark_group("get_index");

    group.bench_function(BenchmarkId::new("OrderedDict", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for p in 0..dict.len() {
                if let Some((_, &v)) = dict.get_index(p) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

// ─── Remove Benchmarks ──────────────────────────────────────────────────────

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N_POSITIONAL);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("OrderedDict", N_POSITIONAL), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OrderedDict<i64, i64>>(),
            |mut dict| {
                for &k in &keys {
                    dict.remove(&k);
                }
                dict
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("HashMap", N_POSITIONAL), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<HashMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_pop_last(c: &mut Criterion) {
    let keys = ordered_keys(N);

    let mut group = c.benchmark_group("pop_last");

    group.bench_function(BenchmarkId::new("OrderedDict", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OrderedDict<i64, i64>>(),
            |mut dict| {
                while dict.pop_last().is_some() {}
                dict
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Iteration Benchmarks ───────────────────────────────────────────────────

fn bench_iter(c: &mut Criterion) {
    let keys = random_keys(N);
    let dict: OrderedDict<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let map: HashMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("iter");

    group.bench_function(BenchmarkId::new("OrderedDict", N), |b| {
        b.iter(|| dict.iter().fold(0i64, |sum, (_, &v)| sum.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| map.iter().fold(0i64, |sum, (_, &v)| sum.wrapping_add(v)));
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random, bench_insert_at_front,);

criterion_group!(lookup_benches, bench_get_random, bench_position_of, bench_get_index,);

criterion_group!(remove_benches, bench_remove_random, bench_pop_last,);

criterion_group!(iter_benches, bench_iter,);

criterion_main!(insert_benches, lookup_benches, remove_benches, iter_benches,);
