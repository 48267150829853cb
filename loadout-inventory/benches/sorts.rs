//! Benchmarks for the tower sorts and the two linear searches.
//!
//! Run with: cargo bench
//!
//! Every sort iteration starts from the same unsorted copy.

use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use loadout_inventory::{Backpack, Component, Item, Satchel, SortStrategy, Tower};

const TOWER_LEN: usize = 20;
const PACK_LEN: usize = 10;

fn reversed_tower() -> Tower {
    let mut tower = Tower::new();
    for i in (0..TOWER_LEN).rev() {
        let priority = (i % 10) as i32 + 1;
        tower
            .push(Component::new(format!("c{i:02}"), format!("k{i:02}"), priority))
            .unwrap();
    }
    tower
}

// ============================================================================
// Sort Benchmarks
// ============================================================================

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("tower_sort");
    group.throughput(Throughput::Elements(TOWER_LEN as u64));

    let tower = reversed_tower();

    for strategy in SortStrategy::ALL {
        group.bench_function(strategy.label(), |b| {
            b.iter_batched_ref(
                || tower.list().to_vec(),
                |data| black_box(strategy.run(data)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Search Benchmarks
// ============================================================================

fn bench_linear_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_search");

    let mut pack = Backpack::new();
    let mut satchel = Satchel::new();
    for i in 0..PACK_LEN {
        let item = Item::new(format!("item{i}"), "util", i as i32);
        pack.insert(item.clone()).unwrap();
        satchel.insert_tail(item).unwrap();
    }
    let last = format!("item{}", PACK_LEN - 1);

    group.bench_function("backpack/last", |b| {
        b.iter(|| black_box(pack.search_linear(black_box(&last))));
    });

    group.bench_function("satchel/last", |b| {
        b.iter(|| black_box(satchel.search_linear(black_box(&last))));
    });

    group.bench_function("backpack/miss", |b| {
        b.iter(|| black_box(pack.search_linear(black_box("absent"))));
    });

    group.bench_function("satchel/miss", |b| {
        b.iter(|| black_box(satchel.search_linear(black_box("absent"))));
    });

    group.finish();
}

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");

    let mut pack = Backpack::new();
    for i in 0..PACK_LEN {
        pack.insert(Item::new(format!("item{i}"), "util", i as i32))
            .unwrap();
    }
    pack.sort_by_name();

    group.bench_function("backpack/hit", |b| {
        b.iter(|| black_box(pack.search_binary(black_box("item7"))));
    });

    let tower = reversed_tower();
    group.bench_function("tower/locate", |b| {
        b.iter(|| black_box(tower.locate(black_box("c07"))));
    });

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_linear_search, bench_binary_search);
criterion_main!(benches);
