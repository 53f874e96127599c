//! Set algebra over [`RobinHoodSet`].
//!
//! Every operation builds its result from scratch by iterating the operands and
//! inserting into a fresh set that shares the first operand's slot count, load
//! factor, functions, allocator and hooks. Membership in the other operand is
//! decided with that operand's own hash and ordering.

use crate::{
    RobinHoodSet,
    allocator::SlotAllocator,
    error::Result,
    hooks::SetHooks,
};

impl<V: Clone, A: SlotAllocator, H: SetHooks> RobinHoodSet<V, A, H> {
    /// Inserts a copy of `value` unless an equal value is already present.
    fn insert_copy(&mut self, value: &V) -> Result<()> {
        if self.lookup(value).is_none() {
            self.try_insert(value.clone())?;
        }
        Ok(())
    }

    /// Values present in either set.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the result cannot be allocated or grown.
    pub fn union<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> Result<Self> {
        let mut result = self.empty_like(self.capacity())?;
        for value in self.iter().chain(other) {
            result.insert_copy(value)?;
        }
        Ok(result)
    }

    /// Values present in both sets. Iterates the smaller of the two.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the result cannot be allocated or grown.
    pub fn intersection<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> Result<Self> {
        let mut result = self.empty_like(self.capacity())?;
        if self.len() < other.len() {
            for value in self.iter().filter(|value| other.lookup(value).is_some()) {
                result.insert_copy(value)?;
            }
        } else {
            for value in other.iter().filter(|value| self.lookup(value).is_some()) {
                result.insert_copy(value)?;
            }
        }
        Ok(result)
    }

    /// Values of `self` absent from `other`.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the result cannot be allocated or grown.
    pub fn difference<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> Result<Self> {
        let mut result = self.empty_like(self.capacity())?;
        for value in self.iter().filter(|value| other.lookup(value).is_none()) {
            result.insert_copy(value)?;
        }
        Ok(result)
    }

    /// Values present in exactly one of the two sets.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the result cannot be allocated or grown.
    pub fn symmetric_difference<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> Result<Self> {
        let mut result = self.empty_like(self.capacity())?;
        for value in self.iter().filter(|value| other.lookup(value).is_none()) {
            result.insert_copy(value)?;
        }
        for value in other.iter().filter(|value| self.lookup(value).is_none()) {
            result.insert_copy(value)?;
        }
        Ok(result)
    }
}

impl<V, A: SlotAllocator, H: SetHooks> RobinHoodSet<V, A, H> {
    /// Whether every value of `self` is in `other`. The empty set is a subset of
    /// every set.
    #[must_use]
    pub fn is_subset<B: SlotAllocator, K: SetHooks>(&self, other: &RobinHoodSet<V, B, K>) -> bool {
        if self.len() > other.len() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        self.iter().all(|value| other.lookup(value).is_some())
    }

    /// Whether every value of `other` is in `self`.
    #[must_use]
    pub fn is_superset<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> bool {
        other.is_subset(self)
    }

    /// Whether `self` is a subset of `other` and strictly smaller. The empty set
    /// is a proper subset of every non-empty set, but not of itself.
    #[must_use]
    pub fn is_proper_subset<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> bool {
        if self.len() >= other.len() {
            return false;
        }
        if self.is_empty() {
            return !other.is_empty();
        }
        self.iter().all(|value| other.lookup(value).is_some())
    }

    /// Whether `other` is a proper subset of `self`.
    #[must_use]
    pub fn is_proper_superset<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> bool {
        other.is_proper_subset(self)
    }

    /// Whether the two sets share no value.
    #[must_use]
    pub fn is_disjoint<B: SlotAllocator, K: SetHooks>(
        &self,
        other: &RobinHoodSet<V, B, K>,
    ) -> bool {
        if self.is_empty() {
            return true;
        }
        self.iter().all(|value| other.lookup(value).is_none())
    }
}

#[cfg(test)]
mod tests {
    use crate::RobinHoodSet;

    fn identity(value: &u64) -> u64 {
        *value
    }

    fn set_of(values: &[u64]) -> RobinHoodSet<u64> {
        let mut set = RobinHoodSet::new(10, 0.6, u64::cmp, identity).unwrap();
        set.extend(values.iter().copied());
        set
    }

    fn sorted(set: &RobinHoodSet<u64>) -> Vec<u64> {
        let mut values: Vec<u64> = set.iter().copied().collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn test_union() {
        let union = set_of(&[1, 2, 3]).union(&set_of(&[3, 4, 5])).unwrap();
        assert_eq!(union.len(), 5);
        assert_eq!(sorted(&union), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_intersection() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[3, 4, 5]);
        let intersection = a.intersection(&b).unwrap();
        assert_eq!(intersection.len(), 1);
        assert_eq!(sorted(&intersection), vec![3]);

        let small = set_of(&[2, 9]);
        assert_eq!(sorted(&small.intersection(&a).unwrap()), vec![2]);
        assert_eq!(sorted(&a.intersection(&small).unwrap()), vec![2]);
    }

    #[test]
    fn test_difference() {
        let difference = set_of(&[1, 2, 3]).difference(&set_of(&[3, 4, 5])).unwrap();
        assert_eq!(difference.len(), 2);
        assert_eq!(sorted(&difference), vec![1, 2]);
    }

    #[test]
    fn test_symmetric_difference() {
        let symmetric = set_of(&[1, 2, 3]).symmetric_difference(&set_of(&[3, 4, 5])).unwrap();
        assert_eq!(symmetric.len(), 4);
        assert_eq!(sorted(&symmetric), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_result_grows_past_first_operand() {
        let a = set_of(&[0]);
        let b = set_of(&(1..200).collect::<Vec<_>>());
        let union = a.union(&b).unwrap();
        assert_eq!(union.len(), 200);
        assert!(union.capacity() > a.capacity());
    }

    #[test]
    fn test_subset_and_superset() {
        let empty = set_of(&[]);
        let small = set_of(&[1, 2]);
        let large = set_of(&[1, 2, 3]);
        let other = set_of(&[1, 4]);

        assert!(empty.is_subset(&large));
        assert!(empty.is_subset(&empty));
        assert!(small.is_subset(&large));
        assert!(small.is_subset(&small));
        assert!(!large.is_subset(&small));
        assert!(!other.is_subset(&large));

        assert!(large.is_superset(&small));
        assert!(large.is_superset(&empty));
        assert!(!small.is_superset(&other));
    }

    #[test]
    fn test_proper_subset_and_superset() {
        let empty = set_of(&[]);
        let small = set_of(&[1, 2]);
        let large = set_of(&[1, 2, 3]);

        assert!(!empty.is_proper_subset(&empty));
        assert!(empty.is_proper_subset(&small));
        assert!(small.is_proper_subset(&large));
        assert!(!small.is_proper_subset(&small));
        assert!(!set_of(&[1, 9]).is_proper_subset(&large));

        assert!(large.is_proper_superset(&small));
        assert!(!large.is_proper_superset(&large));
        assert!(small.is_proper_superset(&empty));
    }

    #[test]
    fn test_disjoint() {
        let empty = set_of(&[]);
        let a = set_of(&[1, 2, 3]);
        assert!(empty.is_disjoint(&a));
        assert!(a.is_disjoint(&empty));
        assert!(a.is_disjoint(&set_of(&[4, 5])));
        assert!(!a.is_disjoint(&set_of(&[3, 4])));
    }
}
