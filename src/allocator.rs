//! Allocation strategy for slot stores.
//!
//! Every store a set owns (at construction, on resize, when copying or when
//! building the result of a set operation) is obtained through a
//! [`SlotAllocator`] and handed back to it once the set is done with it.

use std::fmt::Debug;

use crate::error::{Result, SetError};

/// Strategy providing and reclaiming the backing vectors of a set.
///
/// `allocate` must return an empty vector able to hold `len` items without
/// reallocating. Failing to do so is reported as
/// [`SetError::AllocationFailure`] and leaves the requesting set untouched.
pub trait SlotAllocator: Clone + Debug {
    /// Reserves room for exactly `len` items.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` when the memory cannot be obtained.
    fn allocate<T>(&self, len: usize) -> Result<Vec<T>>;

    /// Takes back a store the set no longer uses.
    fn release<T>(&self, store: Vec<T>) {
        drop(store);
    }
}

/// Allocates from the global allocator, reporting failure instead of aborting.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSlots;

impl SlotAllocator for GlobalSlots {
    fn allocate<T>(&self, len: usize) -> Result<Vec<T>> {
        let mut store = Vec::new();
        store.try_reserve_exact(len).map_err(|_| SetError::AllocationFailure { slots: len })?;
        Ok(store)
    }
}
