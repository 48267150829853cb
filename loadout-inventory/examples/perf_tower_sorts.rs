//! Sort latency for a full tower, per strategy.
//!
//! Fills a tower with pseudo-random components (fixed seed, so every run
//! sorts the same input), then times each strategy on a fresh copy many
//! times and prints histogram quantiles next to the comparison count.
//!
//! Run with:
//!   cargo run --release --example perf_tower_sorts
//!   RUST_LOG=debug cargo run --release --example perf_tower_sorts

use std::error::Error;
use std::hint::black_box;

use loadout_inventory::timing::LatencyRecorder;
use loadout_inventory::{Capacities, Component, LatencySummary, SortStrategy, Tower};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WARMUP: usize = 10_000;
const SAMPLES: usize = 100_000;
const SEED: u64 = 0xDEADBEEF;

const KINDS: [&str; 5] = ["propulsao", "suporte", "controle", "comunicacao", "energia"];

/// Simple deterministic PRNG for a reproducible tower
struct Xorshift {
    state: u64,
}

impl Xorshift {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

fn print_stats(name: &str, comparisons: u64, summary: &LatencySummary) {
    println!("{}", name);
    println!("  comparisons: {:>6}", comparisons);
    println!("{}", summary);
}

fn build_tower(caps: &Capacities, seed: u64) -> Result<Tower, Box<dyn Error>> {
    let mut rng = Xorshift::new(seed);
    let mut tower = Tower::with_capacities(caps);
    for i in 0..tower.capacity() {
        let r = rng.next();
        let name = format!("part-{:04x}-{i:02}", r & 0xffff);
        let kind = KINDS[(r >> 16) as usize % KINDS.len()];
        let priority = ((r >> 24) % 10) as i32 + 1;
        tower.push(Component::new(name, kind, priority))?;
    }
    Ok(tower)
}

fn bench_strategy(tower: &Tower, strategy: SortStrategy) -> Result<(u64, LatencySummary), Box<dyn Error>> {
    let mut recorder = LatencyRecorder::new()?;
    let mut scratch = tower.list().to_vec();

    // Warmup
    for _ in 0..WARMUP {
        scratch.clone_from_slice(tower.list());
        black_box(strategy.run(&mut scratch));
    }

    let mut comparisons = 0;
    for _ in 0..SAMPLES {
        scratch.clone_from_slice(tower.list());
        let timed = recorder.measure(&mut scratch, strategy.sort_fn())?;
        comparisons = black_box(timed.comparisons);
    }

    Ok((comparisons, recorder.summary()))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let caps = Capacities::default();
    caps.validate()?;
    let tower = build_tower(&caps, SEED)?;
    info!(len = tower.len(), "tower built");

    println!(
        "Tower sort latency ({} components, {} samples, seed=0x{:X})",
        tower.len(),
        SAMPLES,
        SEED
    );
    println!("========================================");
    println!();

    for strategy in SortStrategy::ALL {
        let (comparisons, summary) = bench_strategy(&tower, strategy)?;
        print_stats(strategy.label(), comparisons, &summary);
        println!();
    }

    println!("----------------------------------------");
    if let Some(first) = tower.list().first() {
        let lookup = tower.locate(first.name());
        println!(
            "locate {:?}: sort {} comparisons, search {} comparisons",
            first.name(),
            lookup.sort_comparisons,
            lookup.probe.comparisons
        );
    }

    Ok(())
}
