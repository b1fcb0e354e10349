use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::balance_operations::min_depth_for;
use crate::entries::Entry;
use crate::types::{BstMap, Key, Value};

#[derive(Clone, Debug)]
enum Op {
    Insert(Key, Value),
    Remove(Key),
    Search(Key),
    PopFirst,
    Balance,
}

fn key_strategy() -> impl Strategy<Value = Key> + Clone {
    // A narrow range keeps overwrites and removal hits frequent.
    -64..64
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<Value>()).prop_map(|(k, v)| Op::Insert(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        20 => key.clone().prop_map(Op::Search),
        3 => Just(Op::PopFirst),
        2 => Just(Op::Balance),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_btreemap(ops in ops_strategy()) {
        let mut t = BstMap::new();
        let mut m: BTreeMap<Key, Value> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(t.insert(key, value), m.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(key), m.remove(&key));
                }
                Op::Search(key) => {
                    prop_assert_eq!(t.search(key), m.get(&key));
                }
                Op::PopFirst => {
                    prop_assert_eq!(t.pop_first(), m.pop_first());
                }
                Op::Balance => {
                    t.balance();
                    prop_assert!(t.is_balanced());
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        prop_assert_eq!(t.check_invariants_detailed(), Ok(()));
        prop_assert_eq!(t.find_min().map(|n| n.key()), m.keys().next().copied());
        prop_assert_eq!(t.find_max().map(|n| n.key()), m.keys().next_back().copied());

        let got: Vec<(Key, Value)> = t.items().collect();
        let expected: Vec<(Key, Value)> = m.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_balance_reaches_minimum_depth(keys in prop::collection::vec(any::<Key>(), 0..=300)) {
        let mut t: BstMap = keys.iter().map(|&k| (k, k)).collect();
        let before = t.traverse();

        t.balance();

        prop_assert_eq!(t.depth(), min_depth_for(t.len()));
        prop_assert!(t.is_balanced());
        prop_assert_eq!(t.traverse(), before);
        prop_assert_eq!(t.validate(), Ok(()));
    }

    #[test]
    fn prop_ordered_build_round_trips(keys in prop::collection::btree_set(any::<Key>(), 0..=300)) {
        let entries: Vec<Entry> = keys.iter().map(|&k| Entry::new(k, k.wrapping_mul(3))).collect();
        let t = BstMap::create_from_ordered_array(&entries).unwrap();

        prop_assert_eq!(t.traverse().into_vec(), entries);
        prop_assert_eq!(t.depth(), min_depth_for(keys.len()));
        prop_assert!(t.check_invariants());
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys: Vec<Key> = vec![6, 2, 9, 1, 4, 8];

    for_each_permutation(&keys, |perm| {
        let mut t: BstMap = keys.iter().map(|&k| (k, k * 10)).collect();
        let mut m: BTreeMap<Key, Value> = keys.iter().map(|&k| (k, k * 10)).collect();

        for k in perm {
            assert_eq!(t.remove(k), m.remove(&k));
            assert!(t.check_invariants(), "invariants broken after removing {k}");
            assert!(t.keys().eq(m.keys().copied()));
        }
        assert!(t.is_empty());
        assert_eq!(t.arena_stats().allocated_count, 0);
    });
}
