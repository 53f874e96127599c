// RobinHoodSet property tests.
//
// Model: std HashSet driven by the same operation sequence.
// Invariants after every step:
//  - membership and len() match the model;
//  - len() <= floor(capacity() * load()).
// Hash functions: identity and a clustering hash (v % 5) that forces long
// probe runs, displacement and tombstone reuse.
use std::collections::HashSet;

use proptest::{collection::vec, prelude::*};
use robinset::{RobinHoodSet, utils::hash_of};

fn identity(value: &u64) -> u64 {
    *value
}

fn clustered(value: &u64) -> u64 {
    *value % 5
}

fn new_set(hash: fn(&u64) -> u64) -> RobinHoodSet<u64> {
    RobinHoodSet::new(4, 0.5, u64::cmp, hash).unwrap()
}

fn set_of(values: &[u64]) -> RobinHoodSet<u64> {
    let mut set = new_set(identity);
    set.extend(values.iter().copied());
    set
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn within_load(set: &RobinHoodSet<u64>) -> bool {
    set.len() <= (set.capacity() as f64 * set.load()).floor() as usize
}

proptest! {
    #[test]
    fn prop_matches_std_model(
        clustering in any::<bool>(),
        ops in vec((any::<bool>(), 0u64..120), 1..400),
    ) {
        let mut set = new_set(if clustering { clustered } else { identity });
        let mut model = HashSet::new();

        for (insert, value) in ops {
            if insert {
                prop_assert_eq!(set.insert(value), model.insert(value));
                prop_assert!(set.contains(&value));
            } else {
                prop_assert_eq!(set.remove(&value), model.remove(&value));
                prop_assert!(!set.contains(&value));
            }
            prop_assert_eq!(set.len(), model.len());
            prop_assert!(within_load(&set));
        }

        for value in 0..120 {
            prop_assert_eq!(set.contains(&value), model.contains(&value));
        }
        let mut values: Vec<u64> = set.iter().copied().collect();
        values.sort_unstable();
        let mut expected: Vec<u64> = model.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn prop_resize_preserves_contents(
        values in vec(0u64..10_000, 0..300),
        removed in vec(0u64..10_000, 0..100),
        target in 1usize..2_000,
    ) {
        let mut set = set_of(&values);
        for value in &removed {
            set.remove(value);
        }
        let before = set.copy_of().unwrap();
        let slots = set.capacity();

        if set.resize(target) {
            prop_assert!(set.equals(&before));
            prop_assert!(within_load(&set));
        } else {
            prop_assert_eq!(set.capacity(), slots);
            prop_assert!(set.equals(&before));
        }
    }

    #[test]
    fn prop_copy_is_equal_and_independent(
        values in vec(0u64..500, 1..100),
        extra in 500u64..1_000,
    ) {
        let set = set_of(&values);
        let mut copy = set.copy_of().unwrap();
        prop_assert!(set.equals(&copy));
        prop_assert!(copy.equals(&set));

        copy.insert(extra);
        copy.remove(&values[0]);
        prop_assert!(!set.contains(&extra));
        prop_assert!(set.contains(&values[0]));
    }

    #[test]
    fn prop_set_algebra_laws(
        a in vec(0u64..60, 0..40),
        b in vec(0u64..60, 0..40),
    ) {
        let a = set_of(&a);
        let b = set_of(&b);
        let empty = set_of(&[]);

        prop_assert!(empty.is_subset(&a));
        prop_assert_eq!(empty.is_proper_subset(&a), !a.is_empty());

        let intersection = a.intersection(&b).unwrap();
        prop_assert_eq!(a.is_disjoint(&b), intersection.is_empty());
        prop_assert_eq!(a.is_subset(&b) && b.is_subset(&a), a.equals(&b));
        prop_assert_eq!(a.is_superset(&b), b.is_subset(&a));
        prop_assert_eq!(a.is_proper_superset(&b), b.is_proper_subset(&a));

        let union = a.union(&b).unwrap();
        let difference = a.difference(&b).unwrap();
        let symmetric = a.symmetric_difference(&b).unwrap();
        prop_assert_eq!(union.len() + intersection.len(), a.len() + b.len());
        prop_assert_eq!(symmetric.len(), union.len() - intersection.len());
        prop_assert!(difference.is_subset(&a));
        prop_assert!(difference.is_disjoint(&b));
        prop_assert!(a.is_subset(&union) && b.is_subset(&union));
        prop_assert!(intersection.is_subset(&a) && intersection.is_subset(&b));
    }

    #[test]
    fn prop_default_functions_on_strings(words in vec("[a-z]{1,6}", 0..80)) {
        let mut set = RobinHoodSet::with_defaults(4, 0.75).unwrap();
        let expected: HashSet<String> = words.iter().cloned().collect();
        for word in words {
            set.insert(word);
        }
        prop_assert_eq!(set.len(), expected.len());
        for word in &expected {
            prop_assert!(set.contains(word));
            prop_assert_eq!(set.get(word).map(|stored| hash_of(stored)), Some(hash_of(word)));
        }
        prop_assert_eq!(set.max(), expected.iter().max());
        prop_assert_eq!(set.min(), expected.iter().min());
    }
}
