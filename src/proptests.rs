use proptest::prelude::*;

use std::collections::BTreeMap;

use super::{AvlTreeMap, BstTreeMap, Occurrences, Payload};

/// One dictionary operation, drawn from a small key domain so that
/// sequences hit existing keys often.
#[derive(Clone, Debug)]
enum Op {
    Insert(u16, u32),
    Append(u16, u32),
    Get(u16),
    Remove(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u16..64, any::<u32>()).prop_map(|(key, value)| Op::Insert(key, value)),
        (0u16..64, any::<u32>()).prop_map(|(key, value)| Op::Append(key, value)),
        (0u16..64).prop_map(Op::Get),
        (0u16..64).prop_map(Op::Remove),
    ]
}

proptest! {
    /// The AVL engine agrees with a BTreeMap model under arbitrary
    /// operation sequences, and the tree structure stays consistent
    /// after every operation.
    #[test]
    fn avl_matches_model(ops in prop::collection::vec(op_strategy(), 1..256)) {
        let mut map: AvlTreeMap<u16, Occurrences<u32>> = AvlTreeMap::new();
        let mut model: BTreeMap<u16, Vec<u32>> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let inserted = map.insert_value(key, value);
                    prop_assert_eq!(inserted, !model.contains_key(&key));
                    if inserted {
                        model.insert(key, vec![value]);
                    }
                }
                Op::Append(key, value) => {
                    let found = map.update_or_append(&key, value);
                    prop_assert_eq!(found, model.contains_key(&key));
                    if let Some(values) = model.get_mut(&key) {
                        values.push(value);
                    }
                }
                Op::Get(key) => {
                    prop_assert_eq!(
                        map.get(&key).map(Payload::values),
                        model.get(&key).map(Vec::as_slice)
                    );
                }
                Op::Remove(key) => {
                    let removed = map.remove(&key).map(|payload| payload.values().to_vec());
                    prop_assert_eq!(removed, model.remove(&key));
                }
            }
            map.check_consistency();
            prop_assert_eq!(map.len(), model.len());
        }

        // The final traversal matches the model entry for entry
        for ((key, payload), (model_key, values)) in map.iter().zip(model.iter()) {
            prop_assert_eq!(key, model_key);
            prop_assert_eq!(payload.values(), values.as_slice());
        }
    }

    /// The unbalanced reference engine agrees with the model for the
    /// operations it supports.
    #[test]
    fn bst_matches_model(ops in prop::collection::vec(op_strategy(), 1..256)) {
        let mut map: BstTreeMap<u16, Occurrences<u32>> = BstTreeMap::new();
        let mut model: BTreeMap<u16, Vec<u32>> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let inserted = map.insert_value(key, value);
                    prop_assert_eq!(inserted, !model.contains_key(&key));
                    if inserted {
                        model.insert(key, vec![value]);
                    }
                }
                Op::Append(key, value) => {
                    let found = map.update_or_append(&key, value);
                    prop_assert_eq!(found, model.contains_key(&key));
                    if let Some(values) = model.get_mut(&key) {
                        values.push(value);
                    }
                }
                Op::Get(key) => {
                    prop_assert_eq!(
                        map.get(&key).map(Payload::values),
                        model.get(&key).map(Vec::as_slice)
                    );
                }
                // The reference engine has no removal
                Op::Remove(_) => {}
            }
            map.check_consistency();
            prop_assert_eq!(map.len(), model.len());
        }

        let keys: Vec<u16> = map.iter().map(|(&key, _)| key).collect();
        let model_keys: Vec<u16> = model.keys().copied().collect();
        prop_assert_eq!(keys, model_keys);
    }

    /// Ascending traversal yields strictly increasing keys, descending
    /// traversal the exact reverse, for both engines.
    #[test]
    fn traversal_is_ordered(keys in prop::collection::vec(any::<i32>(), 0..128)) {
        let mut avl = AvlTreeMap::new();
        let mut bst = BstTreeMap::new();
        for &key in &keys {
            avl.insert(key, ());
            bst.insert(key, ());
        }

        let ascending: Vec<i32> = avl.iter().map(|(&key, _)| key).collect();
        prop_assert!(ascending.windows(2).all(|pair| pair[0] < pair[1]));

        let descending: Vec<i32> = avl.iter().rev().map(|(&key, _)| key).collect();
        let mut reversed = ascending.clone();
        reversed.reverse();
        prop_assert_eq!(descending, reversed);

        let bst_ascending: Vec<i32> = bst.iter().map(|(&key, _)| key).collect();
        prop_assert_eq!(bst_ascending, ascending);
    }

    /// The AVL height never exceeds the worst-case bound for the node
    /// count, no matter the insertion order.
    #[test]
    fn height_stays_bounded(keys in prop::collection::vec(any::<i32>(), 1..512)) {
        let mut map = AvlTreeMap::new();
        for &key in &keys {
            map.insert(key, ());
        }

        let n = map.len() as f64;
        let bound = 1.44 * (n + 2.0).log2() - 0.33;
        prop_assert!((map.height() as f64) <= bound);
    }
}
