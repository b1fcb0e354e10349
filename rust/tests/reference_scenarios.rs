use bstmap::{BstError, BstMap, Entry, OrderedEntries, ParentSlot};

fn sample_keys() -> [i32; 7] {
    [6, 2, 9, 1, 4, 8, 12]
}

#[test]
fn test_insert_traverse_and_search() {
    let mut tree = BstMap::new();
    for key in sample_keys() {
        assert_eq!(tree.insert(key, key), None);
    }

    let entries = tree.traverse();
    let pairs: Vec<(i32, i32)> = entries.iter().map(|&e| e.into()).collect();
    assert_eq!(
        pairs,
        vec![(1, 1), (2, 2), (4, 4), (6, 6), (8, 8), (9, 9), (12, 12)]
    );

    assert_eq!(tree.search(8), Some(&8));
    assert_eq!(tree.search(5), None);
    assert_eq!(tree.find_min().unwrap().key(), 1);
    assert_eq!(tree.find_max().unwrap().key(), 12);
}

#[test]
fn test_update_keeps_shape() {
    let mut tree = BstMap::new();
    for key in sample_keys() {
        tree.insert(key, key);
    }
    let nine = tree.find_node(9).unwrap().id();

    assert_eq!(tree.insert(9, 900), Some(9));
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.find_node(9).unwrap().id(), nine);
    assert_eq!(tree.search(9), Some(&900));
}

#[test]
fn test_balance_skewed_insertion_order() {
    let mut tree = BstMap::new();
    for (key, value) in [(8, 80), (6, 60), (9, 90), (2, 20), (12, 120), (1, 10), (4, 40)] {
        tree.insert(key, value);
    }

    tree.balance();

    let root = tree.root_node().unwrap();
    assert_eq!(root.key(), 6);
    let (left, right) = (root.left().unwrap(), root.right().unwrap());
    assert_eq!((left.key(), right.key()), (2, 9));
    let leaves: Vec<i32> = [left.left(), left.right(), right.left(), right.right()]
        .into_iter()
        .map(|n| n.unwrap().key())
        .collect();
    assert_eq!(leaves, vec![1, 4, 8, 12]);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn test_removal_sequence() {
    let mut tree = BstMap::new();
    for key in sample_keys() {
        tree.insert(key, key * 10);
    }

    tree.remove(12);
    let right = tree.root_node().unwrap().right().unwrap();
    assert_eq!(right.key(), 9);
    assert!(right.right().is_none());

    tree.remove(9);
    let root = tree.root_node().unwrap();
    let right = root.right().unwrap();
    assert_eq!(right.key(), 8);
    assert_eq!(right.parent_slot(), Some(ParentSlot::right_of(root.id())));

    tree.remove(2);
    let left = tree.root_node().unwrap().left().unwrap();
    assert_eq!(left.key(), 4);
    assert_eq!(left.value(), 40);

    assert_eq!(tree.keys().collect::<Vec<_>>(), vec![1, 4, 6, 8]);
    assert!(tree.check_invariants());
}

#[test]
fn test_ordered_array_round_trip() {
    let entries: Vec<Entry> = [1, 2, 4, 6, 8, 9, 12]
        .into_iter()
        .map(|k| Entry::new(k, k * 10))
        .collect();

    let tree = BstMap::create_from_ordered_array(&entries).unwrap();
    assert_eq!(tree.traverse(), OrderedEntries::from(entries));
    assert_eq!(tree.root_node().unwrap().key(), 6);
}

#[test]
fn test_ordered_array_rejects_unsorted_input() {
    let entries = [Entry::new(3, 0), Entry::new(2, 0)];
    let err = BstMap::create_from_ordered_array(&entries).unwrap_err();
    assert_eq!(err, BstError::UnorderedEntries { index: 1 });
}

#[test]
fn test_empty_tree_edges() {
    let mut tree = BstMap::new();
    assert!(tree.find_min().is_none());
    assert!(tree.find_max().is_none());
    assert_eq!(tree.remove(1), None);
    assert!(tree.traverse().is_empty());

    tree.balance();
    assert!(tree.is_empty());
    assert_eq!(tree.try_remove(1), Err(BstError::EmptyTree));
}

#[test]
fn test_node_views_enumerate_the_tree() {
    let tree = BstMap::from_keys(&sample_keys()).unwrap();

    let mut stack = vec![tree.root_node().unwrap()];
    let mut seen = Vec::new();
    while let Some(node) = stack.pop() {
        seen.push(node.key());
        if let Some(parent) = node.parent() {
            assert!(parent.left().map(|n| n.id()) == Some(node.id())
                || parent.right().map(|n| n.id()) == Some(node.id()));
        }
        stack.extend(node.left());
        stack.extend(node.right());
    }
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 4, 6, 8, 9, 12]);
}

#[test]
fn test_search_path_steps() {
    let tree = BstMap::from_keys(&sample_keys()).unwrap();
    let keys_along = |key: i32| -> (Vec<i32>, bool) {
        let (path, found) = tree.search_path(key);
        let keys = path.iter().map(|&id| tree.node(id).unwrap().key()).collect();
        (keys, found.is_some())
    };

    assert_eq!(keys_along(8), (vec![6, 9, 8], true));
    assert_eq!(keys_along(5), (vec![6, 2, 4], false));
    assert_eq!(keys_along(13), (vec![6, 9, 12], false));
    assert!(BstMap::new().search_path(8).0.is_empty());
}
