use btree::{BTree, BTreeError};

#[test]
fn test_mixed_insert_search_delete_degree_3() {
    let mut tree = BTree::new(3).unwrap();
    let keys = [10, 20, 5, 6, 12, 30, 7, 17];
    for key in keys {
        assert!(tree.insert(key));
    }

    // Capacity 5: the first full leaf [5, 6, 10, 12, 20] split once around 10
    assert_eq!(tree.root().keys(), &[10]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root().children()[0].keys(), &[5, 6, 7]);
    assert_eq!(tree.root().children()[1].keys(), &[12, 17, 20, 30]);

    assert!(tree.search(&20));
    assert!(!tree.search(&25));

    assert!(tree.delete(&20));
    assert!(!tree.search(&20));
    for key in keys.iter().filter(|&&k| k != 20) {
        assert!(tree.search(key), "key {} lost after deleting 20", key);
    }
    assert_eq!(tree.len(), 7);
    assert!(tree.check_invariants());
}

#[test]
fn test_deleting_root_key_merges_minimal_leaves_into_new_root() {
    let mut tree = BTree::new(2).unwrap();
    for key in [1, 2, 3, 4] {
        tree.insert(key);
    }
    assert!(tree.delete(&4));

    // Root [2] over two minimal leaves [1] and [3]
    assert_eq!(tree.root().keys(), &[2]);
    assert_eq!(tree.root().children()[0].keys(), &[1]);
    assert_eq!(tree.root().children()[1].keys(), &[3]);

    assert!(tree.delete(&2));

    assert!(tree.is_leaf_root());
    assert_eq!(tree.root().keys(), &[1, 3]);
    assert!(tree.root().children().is_empty());
    assert_eq!(tree.height(), 1);
}

#[test]
fn test_descending_into_minimal_left_child_borrows_from_right() {
    let mut tree = BTree::new(2).unwrap();
    for key in [1, 2, 3, 4] {
        tree.insert(key);
    }
    // Root [2] over [1] (minimal) and [3, 4] (spare key)
    assert_eq!(tree.root().children()[0].keys(), &[1]);
    assert_eq!(tree.root().children()[1].keys(), &[3, 4]);

    assert!(tree.delete(&1));

    // Separator 2 rotated down, 3 rotated up; exactly one key moved
    assert_eq!(tree.root().keys(), &[3]);
    assert_eq!(tree.root().children()[0].keys(), &[2]);
    assert_eq!(tree.root().children()[1].keys(), &[4]);
    assert_eq!(tree.keys_in_order(), vec![&2, &3, &4]);
    assert!(tree.check_invariants());
}

#[test]
fn test_invalid_degree_is_configuration_error() {
    let err = BTree::<u8>::new(1).unwrap_err();
    assert!(err.is_configuration_error());
    assert!(matches!(err, BTreeError::InvalidConfiguration(_)));
}

#[test]
fn test_delete_everything_leaves_empty_root() {
    let mut tree = BTree::new(2).unwrap();
    for key in 0..50 {
        tree.insert(key);
    }
    for key in (0..50).rev() {
        assert!(tree.delete(&key));
        assert!(tree.check_invariants(), "{}", tree.structure_dump());
    }
    assert!(tree.is_empty());
    assert!(tree.is_leaf_root());
    assert_eq!(tree.root().len(), 0);
    assert!(!tree.delete(&0));
}

#[test]
fn test_string_keys() {
    let mut tree = BTree::new(2).unwrap();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry"] {
        tree.insert(word.to_string());
    }
    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    assert_eq!(tree.last().map(String::as_str), Some("pear"));
    assert!(tree.delete(&"fig".to_string()));
    assert!(!tree.search(&"fig".to_string()));
    assert_eq!(tree.len(), 5);
}
