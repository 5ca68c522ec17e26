#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can walk
// private structure (bucket heads and chains) without feature gates.

use crate::chained_hash_map::{bucket_index, ChainedHashMap};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Delete(usize),
    Find(usize),
    FindMut(usize, i32),
    Contains(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, usize, Vec<OpI>)> {
    (proptest::collection::vec("[a-z]{0,5}", 1..=8), 1usize..=12).prop_flat_map(
        |(pool, capacity)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                idx.clone().prop_map(OpI::Delete),
                idx.clone().prop_map(OpI::Find),
                (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::FindMut(i, d)),
                prop_oneof![
                    contains_pool.prop_map(|s: String| s),
                    "[a-z]{0,5}".prop_map(|s| s)
                ]
                .prop_map(OpI::Contains),
            ];
            (
                Just(pool),
                Just(capacity),
                proptest::collection::vec(op, 1..64),
            )
        },
    )
}

// Walks every bucket and checks the structural invariants: each reachable
// entry hashes to its own bucket, no entry is reachable twice, and the
// reachable count matches both `len` and the arena's slot count.
fn assert_structure(m: &ChainedHashMap<i32>) {
    let mut seen = std::collections::HashSet::new();
    for b in 0..m.capacity() {
        for slot in m.chain_slots(b) {
            assert_eq!(bucket_index(m.slot_key(slot), m.capacity()), b);
            assert!(seen.insert(slot), "slot reachable from two chains");
        }
    }
    assert_eq!(seen.len(), m.len());
    assert_eq!(seen.len(), m.stored_entries());
}

proptest! {
    // Model: each key maps to a stack of values; insert pushes, delete pops,
    // find observes the top. This mirrors prepend-on-insert shadowing.
    #[test]
    fn prop_matches_stack_model((pool, capacity, ops) in arb_scenario()) {
        let mut m: ChainedHashMap<i32> = ChainedHashMap::with_capacity(capacity).unwrap();
        let mut model: HashMap<String, Vec<i32>> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    m.insert(&pool[i], v);
                    model.entry(pool[i].clone()).or_default().push(v);
                }
                OpI::Delete(i) => {
                    let popped = model.get_mut(&pool[i]).and_then(|s| s.pop());
                    prop_assert_eq!(m.delete(&pool[i]), popped);
                }
                OpI::Find(i) => {
                    let top = model.get(&pool[i]).and_then(|s| s.last());
                    prop_assert_eq!(m.find(&pool[i]), top);
                }
                OpI::FindMut(i, d) => {
                    if let Some(v) = m.find_mut(&pool[i]) {
                        *v = v.wrapping_add(d);
                    }
                    if let Some(top) = model.get_mut(&pool[i]).and_then(|s| s.last_mut()) {
                        *top = top.wrapping_add(d);
                    }
                }
                OpI::Contains(s) => {
                    let expected = model.get(&s).is_some_and(|st| !st.is_empty());
                    prop_assert_eq!(m.contains_key(&s), expected);
                }
            }

            // Structural invariants hold after every step.
            assert_structure(&m);
            let expected_len: usize = model.values().map(Vec::len).sum();
            prop_assert_eq!(m.len(), expected_len);
        }
    }

    // Hash placement: deterministic and in range for arbitrary keys.
    #[test]
    fn prop_bucket_index_in_range(key in "\\PC*", capacity in 1usize..=4096) {
        let b = bucket_index(&key, capacity);
        prop_assert!(b < capacity);
        prop_assert_eq!(b, bucket_index(&key, capacity));
    }
}
