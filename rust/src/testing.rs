//! Shared fixtures for unit tests.

use std::sync::Once;

use crate::entries::Entry;
use crate::types::{BstMap, Key};

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Insertion order that yields a perfect tree of height two:
///
/// ```text
///         6
///       /   \
///      2     9
///     / \   / \
///    1   4 8   12
/// ```
pub fn height_two_keys() -> Vec<Key> {
    vec![6, 2, 9, 1, 4, 8, 12]
}

/// The tree drawn above, each value ten times its key.
pub fn tree_of_height_two() -> BstMap {
    init_tracing();
    height_two_keys().into_iter().map(|k| (k, k * 10)).collect()
}

/// Sorted entries of [`tree_of_height_two`].
pub fn entries_of_height_two() -> Vec<Entry> {
    let mut keys = height_two_keys();
    keys.sort_unstable();
    keys.into_iter().map(|k| Entry::new(k, k * 10)).collect()
}

/// Same entries, inserted so that the tree is four levels deep:
///
/// ```text
///           8
///         /   \
///        6     9
///       /       \
///      2         12
///     / \
///    1   4
/// ```
pub fn skewed_tree() -> BstMap {
    init_tracing();
    [(8, 80), (6, 60), (9, 90), (2, 20), (12, 120), (1, 10), (4, 40)]
        .into_iter()
        .collect()
}
