#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chainmap::{ChainedHashMap, ConcurrentChainedMap};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>().new_tree(&mut runner).unwrap().current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    let mut chained_map = ChainedHashMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("chainmap insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                chained_map.insert(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("chainmap get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });

    let concurrent_map = ConcurrentChainedMap::new();
    group.bench_function("chainmap concurrent insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                concurrent_map.insert(key, value);
            }
        });
    });
    group.bench_function("chainmap concurrent get", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for (key, _) in &items {
                if concurrent_map.get(key).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
