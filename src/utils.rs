//! Default element functions and helpers for building sets

use std::{
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use crate::{RobinHoodSet, error::Result};

/// Hashes `value` with the std `DefaultHasher`.
///
/// Deterministic within a build, so suitable as a set's hash function.
pub fn hash_of<V: Hash + ?Sized>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Orders two values by their `Ord` implementation.
pub fn order_of<V: Ord + ?Sized>(a: &V, b: &V) -> Ordering {
    a.cmp(b)
}

/// Creates a `RobinHoodSet` with default functions from an iterator of values.
///
/// The set is sized for the iterator's lower size bound under `load`.
///
/// # Errors
///
/// Any construction or growth error.
pub fn from_iter<V, I>(iter: I, load: f64) -> Result<RobinHoodSet<V>>
where
    V: Ord + Hash,
    I: IntoIterator<Item = V>,
{
    let iter = iter.into_iter();
    let mut set = RobinHoodSet::with_defaults(iter.size_hint().0.max(1), load)?;

    for value in iter {
        set.try_insert(value)?;
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter() {
        let data = vec!["a".to_string(), "b".to_string(), "c".to_string(), "a".to_string()];

        let set = from_iter(data, 0.75).unwrap();

        assert!(set.contains(&"a".to_string()));
        assert!(set.contains(&"b".to_string()));
        assert!(set.contains(&"c".to_string()));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_from_iter_rejects_bad_load() {
        assert!(from_iter(0..10_u32, 1.5).is_err());
    }

    #[test]
    fn test_hash_of_is_deterministic() {
        assert_eq!(hash_of("key"), hash_of(&"key".to_string()));
        assert_ne!(hash_of(&1_u64), hash_of(&2_u64));
    }

    #[test]
    fn test_order_of() {
        assert_eq!(order_of(&1, &2), Ordering::Less);
        assert_eq!(order_of("b", "a"), Ordering::Greater);
    }
}
