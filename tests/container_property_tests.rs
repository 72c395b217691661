//! Property-based testing for the container types
//!
//! Validates FlexVec against a `std::vec::Vec` model and BucketSet against
//! a `std::collections` model across randomized operation sequences.

use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use vecset::{BucketSet, FlexVec};

fn int_cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

fn mod_hash(k: &i32, buckets: usize) -> usize {
    k.rem_euclid(buckets as i32) as usize
}

// =============================================================================
// FLEXVEC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_append_preserves_order(
        initial_cap in 1usize..16,
        elements in prop::collection::vec(any::<i32>(), 0..500)
    ) {
        let mut vec = FlexVec::with_capacity(initial_cap).unwrap();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        prop_assert_eq!(vec.len(), elements.len());
        prop_assert!(vec.capacity() >= vec.len().max(initial_cap));
        prop_assert_eq!(vec.as_slice(), elements.as_slice());
    }

    #[test]
    fn prop_insert_matches_vec_model(
        ops in prop::collection::vec((any::<i32>(), any::<usize>()), 0..200)
    ) {
        let mut vec = FlexVec::with_capacity(1).unwrap();
        let mut model: Vec<i32> = Vec::new();

        for (value, raw_pos) in ops {
            let pos = raw_pos % (model.len() + 1);
            vec.insert(value, pos).unwrap();
            model.insert(pos, value);
        }

        prop_assert_eq!(vec.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_remove_matches_vec_model(
        elements in prop::collection::vec(any::<i32>(), 1..200),
        removals in prop::collection::vec(any::<usize>(), 0..200)
    ) {
        let mut vec = FlexVec::with_capacity(4).unwrap();
        let mut model = elements.clone();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        for raw_pos in removals {
            if model.is_empty() {
                break;
            }
            let pos = raw_pos % model.len();
            vec.remove(pos);
            model.remove(pos);
        }

        prop_assert_eq!(vec.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_replace_keeps_length(
        elements in prop::collection::vec(any::<i32>(), 1..100),
        pos in any::<usize>(),
        value in any::<i32>()
    ) {
        let mut vec = FlexVec::with_capacity(2).unwrap();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        let pos = pos % elements.len();
        vec.replace(value, pos);

        prop_assert_eq!(vec.len(), elements.len());
        prop_assert_eq!(vec[pos], value);
    }

    #[test]
    fn prop_linear_search_agrees_with_model(
        elements in prop::collection::vec(-50i32..50, 0..100),
        key in -60i32..60
    ) {
        let mut vec = FlexVec::with_capacity(1).unwrap();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        let expected = elements.iter().position(|&e| e == key);
        prop_assert_eq!(vec.search(&key, int_cmp, false), expected);
    }

    #[test]
    fn prop_sorted_search_finds_first_match(
        mut elements in prop::collection::vec(-50i32..50, 1..100),
        key in -60i32..60
    ) {
        elements.sort_unstable();
        let mut vec = FlexVec::with_capacity(1).unwrap();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        let expected = elements.iter().position(|&e| e == key);
        prop_assert_eq!(vec.search_from(&key, int_cmp, 0, true), expected);
    }

    #[test]
    fn prop_sort_matches_std(
        elements in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        let mut vec = FlexVec::with_capacity(1).unwrap();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        let mut model = elements;
        model.sort_unstable();
        vec.sort_unstable_by(int_cmp);

        prop_assert_eq!(vec.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_for_each_visits_every_element_once(
        elements in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        let mut vec = FlexVec::with_capacity(1).unwrap();
        for &elem in &elements {
            vec.push(elem).unwrap();
        }

        let mut seen = Vec::new();
        vec.for_each_mut(|v| seen.push(*v));
        prop_assert_eq!(seen, elements);
    }
}

// =============================================================================
// BUCKETSET PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_count_equals_distinct_keys(
        bucket_count in 1usize..32,
        keys in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        let mut set = BucketSet::new(bucket_count, mod_hash, int_cmp).unwrap();
        let mut model = std::collections::BTreeSet::new();

        for &key in &keys {
            set.insert(key).unwrap();
            model.insert(key);
        }

        prop_assert_eq!(set.len(), model.len());
        for key in &model {
            prop_assert_eq!(set.get(key), Some(key));
        }
    }

    #[test]
    fn prop_lookup_misses_absent_keys(
        keys in prop::collection::vec(0i32..1000, 0..100),
        probe in 1000i32..2000
    ) {
        let mut set = BucketSet::new(7, mod_hash, int_cmp).unwrap();
        for &key in &keys {
            set.insert(key).unwrap();
        }

        prop_assert_eq!(set.get(&probe), None);
    }

    #[test]
    fn prop_upsert_keeps_most_recent_payload(
        entries in prop::collection::vec((0u8..16, any::<i32>()), 0..200)
    ) {
        // key identity is the low byte; the payload rides in the upper bits
        let cmp = |a: &(u8, i32), b: &(u8, i32)| a.0.cmp(&b.0);
        let hash = |e: &(u8, i32), n: usize| e.0 as usize % n;

        let mut set = BucketSet::new(5, hash, cmp).unwrap();
        let mut model: BTreeMap<u8, i32> = BTreeMap::new();

        for &(key, payload) in &entries {
            set.insert((key, payload)).unwrap();
            model.insert(key, payload);
        }

        prop_assert_eq!(set.len(), model.len());
        for (&key, &payload) in &model {
            prop_assert_eq!(set.get(&(key, 0)), Some(&(key, payload)));
        }
    }

    #[test]
    fn prop_map_visits_each_stored_element_once(
        bucket_count in 1usize..16,
        keys in prop::collection::btree_set(any::<i32>(), 0..200)
    ) {
        let mut set = BucketSet::new(bucket_count, mod_hash, int_cmp).unwrap();
        for &key in &keys {
            set.insert(key).unwrap();
        }

        let mut seen = Vec::new();
        set.for_each_mut(|v| seen.push(*v));
        seen.sort_unstable();

        let expected: Vec<i32> = keys.into_iter().collect();
        prop_assert_eq!(seen, expected);
    }
}
