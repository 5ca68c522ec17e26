use chained_hashmap::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("chained_hashmap_insert_10k", |b| {
        b.iter_batched(
            || ChainedHashMap::<u64>::with_capacity(4096).unwrap(),
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.insert(&key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit(c: &mut Criterion) {
    c.bench_function("chained_hashmap_find_hit", |b| {
        let mut m = ChainedHashMap::with_capacity(4096).unwrap();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.find(k));
        })
    });
}

fn bench_find_miss(c: &mut Criterion) {
    c.bench_function("chained_hashmap_find_miss", |b| {
        let mut m = ChainedHashMap::with_capacity(4096).unwrap();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.insert(&key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = format!("m{:016x}", miss.next().unwrap());
            black_box(m.find(&k));
        })
    });
}

fn bench_delete_reinsert(c: &mut Criterion) {
    c.bench_function("chained_hashmap_delete_reinsert", |b| {
        let mut m = ChainedHashMap::with_capacity(4096).unwrap();
        let keys: Vec<_> = lcg(23).take(10_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            let v = m.delete(k).unwrap();
            m.insert(k, v);
        })
    });
}

// Deliberately undersized table: 10k keys across 16 buckets measures the
// linear chain scan the fixed capacity accepts as a tradeoff.
fn bench_chain_pressure(c: &mut Criterion) {
    c.bench_function("chained_hashmap_find_hit_long_chains", |b| {
        let mut m = ChainedHashMap::with_capacity(16).unwrap();
        let keys: Vec<_> = lcg(31).take(10_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.find(k));
        })
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_find_hit,
    bench_find_miss,
    bench_delete_reinsert,
    bench_chain_pressure
);
criterion_main!(benches);
