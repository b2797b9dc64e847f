use compressed_trie::{EdgeStore, IndexedEdges, LinearEdges, NoopObserver, Trie};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random lowercase keys; a wide alphabet gives the root a large fan-out.
fn keys(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range('a'..='z')).collect()
        })
        .collect()
}

fn build<S: EdgeStore>(keys: &[String]) -> Trie<S> {
    let mut trie = Trie::with_observer(NoopObserver);
    trie.extend(keys.iter());
    trie
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &count in &[1_000, 10_000] {
        let keys = keys(count, 1);
        group.bench_with_input(BenchmarkId::new("indexed", count), &keys, |b, keys| {
            b.iter(|| build::<IndexedEdges>(black_box(keys)))
        });
        group.bench_with_input(BenchmarkId::new("linear", count), &keys, |b, keys| {
            b.iter(|| build::<LinearEdges>(black_box(keys)))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let keys = keys(10_000, 2);
    let probes = {
        let mut probes = keys[..1_000].to_vec();
        probes.extend(self::keys(1_000, 3));
        probes
    };

    let indexed = build::<IndexedEdges>(&keys);
    let linear = build::<LinearEdges>(&keys);

    group.bench_function("indexed", |b| {
        b.iter(|| probes.iter().filter(|p| indexed.search(black_box(p))).count())
    });
    group.bench_function("linear", |b| {
        b.iter(|| probes.iter().filter(|p| linear.search(black_box(p))).count())
    });
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let keys = keys(5_000, 4);
    c.bench_function("delete_all_indexed", |b| {
        b.iter_with_setup(
            || build::<IndexedEdges>(&keys),
            |mut trie| {
                for key in &keys {
                    let _ = trie.delete(key);
                }
                trie
            },
        )
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_delete);
criterion_main!(benches);
