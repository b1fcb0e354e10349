use bstmap::{min_depth_for, BstMap, BstResultExt};
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Lookup cost on a fully skewed tree versus the same entries after balance().
// Note: Run in release mode for meaningful results.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Configurable via env vars if needed
    let tree_size: i32 = std::env::var("TREE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10_000);
    let lookups: usize = std::env::var("LOOKUPS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100_000);

    println!("=== Skew Profiler ===");
    println!("Size: {} ascending keys, {} lookups", tree_size, lookups);

    // Pseudo-random deterministic lookup keys across [0, tree_size)
    let modulus = u64::from(tree_size.max(1).unsigned_abs());
    let lookup_keys: Vec<i32> = (0..lookups)
        .scan(42_u64, |seed, _| {
            *seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            i32::try_from(*seed % modulus).ok()
        })
        .collect();

    let start = Instant::now();
    let keys: Vec<i32> = (0..tree_size).collect();
    // Ascending keys, each value equal to its key.
    let mut tree = BstMap::from_keys(&keys).or_default_with_log();
    let build = start.elapsed();
    info!(len = tree.len(), ?build, "built skewed tree");

    let skewed_depth = tree.depth();
    let skewed = time_lookups(&tree, &lookup_keys);

    let start = Instant::now();
    tree.balance();
    let rebuild = start.elapsed();

    let balanced_depth = tree.depth();
    let balanced = time_lookups(&tree, &lookup_keys);

    let skewed_per_op = skewed.as_nanos() as f64 / lookups.max(1) as f64;
    let balanced_per_op = balanced.as_nanos() as f64 / lookups.max(1) as f64;

    println!("\nBuild (ascending inserts): {:?}", build);
    println!("Balance (rebuild):         {:?}", rebuild);
    println!("\nLookups:");
    println!(
        "  Skewed:   depth {:>6}  {:?} total ({:.1} ns/op)",
        skewed_depth, skewed, skewed_per_op
    );
    println!(
        "  Balanced: depth {:>6}  {:?} total ({:.1} ns/op)",
        balanced_depth, balanced, balanced_per_op
    );
    println!(
        "  Expected balanced depth: {}",
        min_depth_for(tree.len())
    );
    if balanced_per_op > 0.0 {
        println!("  Speedup:  {:.2}x", skewed_per_op / balanced_per_op);
    }
}

fn time_lookups(tree: &BstMap, keys: &[i32]) -> Duration {
    let start = Instant::now();
    let mut hits = 0usize;
    for &key in keys {
        if tree.search(std::hint::black_box(key)).is_some() {
            hits += 1;
        }
    }
    let elapsed = start.elapsed();
    info!(hits, misses = keys.len() - hits, "lookup pass finished");
    elapsed
}
