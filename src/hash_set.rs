use std::{cmp::Ordering, fmt, hash::Hash, mem};

use tracing::{debug, trace, warn};

use crate::{
    allocator::{GlobalSlots, SlotAllocator},
    capacity::calculate_size,
    config::{self, SetConfig},
    cursor::Iter,
    error::{Result, SetError},
    hooks::{NoHooks, SetHooks},
    probe::{self, Entry, ProbeStats},
    utils::{hash_of, order_of},
};

/// Total order over the elements, also deciding element equality.
pub type CompareFn<V> = fn(&V, &V) -> Ordering;

/// Deterministic hash of an element.
pub type HashFn<V> = fn(&V) -> u64;

/// An unordered set of unique values stored in a robin-hood hash table.
///
/// Values live directly in a slot store sized along the
/// [capacity ladder](crate::capacity::PRIME_LADDER). Collisions are resolved by
/// linear probing where an inserted value takes the slot of any resident that
/// sits closer to its own home, which keeps probe lengths even. Removal leaves
/// a tombstone; tombstones are dropped the next time the store is rebuilt.
///
/// Equality of elements is decided by `compare` returning `Ordering::Equal`,
/// and `hash` must agree with it: values comparing equal hash equally.
///
/// Note: This implementation is not thread-safe.
pub struct RobinHoodSet<V, A: SlotAllocator = GlobalSlots, H: SetHooks = NoHooks> {
    /// The slot store
    entries: Vec<Entry<V>>,
    /// Number of live values
    count: usize,
    /// Maximum ratio of live values to slots, in (0, 1)
    load: f64,
    /// Element ordering and equality
    compare: CompareFn<V>,
    /// Element hash
    hash: HashFn<V>,
    /// Provides and reclaims slot stores
    allocator: A,
    /// Instrumentation callbacks
    hooks: H,
}

impl<V> RobinHoodSet<V> {
    /// Creates a set able to hold `capacity` values under `load` before growing.
    ///
    /// # Errors
    ///
    /// `ZeroCapacity`, `InvalidLoad` or `CapacityOverflow` for invalid
    /// parameters, `AllocationFailure` if the slot store cannot be allocated.
    pub fn new(
        capacity: usize,
        load: f64,
        compare: CompareFn<V>,
        hash: HashFn<V>,
    ) -> Result<Self> {
        Self::with_config(SetConfig::new(capacity, load), compare, hash)
    }

    /// Creates a set from a [`SetConfig`].
    ///
    /// # Errors
    ///
    /// See [`RobinHoodSet::new`].
    pub fn with_config(config: SetConfig, compare: CompareFn<V>, hash: HashFn<V>) -> Result<Self> {
        Self::with_parts(config, compare, hash, GlobalSlots, NoHooks)
    }
}

impl<V: Ord + Hash> RobinHoodSet<V> {
    /// Creates a set ordered by `Ord` and hashed with the std `DefaultHasher`.
    ///
    /// # Errors
    ///
    /// See [`RobinHoodSet::new`].
    pub fn with_defaults(capacity: usize, load: f64) -> Result<Self> {
        Self::new(capacity, load, order_of::<V>, hash_of::<V>)
    }
}

impl<V, A: SlotAllocator, H: SetHooks> RobinHoodSet<V, A, H> {
    /// Creates a set with an explicit allocation strategy and hooks.
    ///
    /// # Errors
    ///
    /// See [`RobinHoodSet::new`].
    pub fn with_parts(
        config: SetConfig,
        compare: CompareFn<V>,
        hash: HashFn<V>,
        allocator: A,
        hooks: H,
    ) -> Result<Self> {
        let slots = config.slots()?;
        Self::with_slots(slots, config.load, compare, hash, allocator, hooks)
    }

    /// Creates an empty set of exactly `slots` slots.
    fn with_slots(
        slots: usize,
        load: f64,
        compare: CompareFn<V>,
        hash: HashFn<V>,
        allocator: A,
        hooks: H,
    ) -> Result<Self> {
        let entries = Self::allocate_store(&allocator, slots)?;
        trace!(slots, load, "created robin-hood set");
        hooks.on_create(slots);
        Ok(Self { entries, count: 0, load, compare, hash, allocator, hooks })
    }

    /// Creates an empty set of `slots` slots sharing this set's parameters.
    pub(crate) fn empty_like(&self, slots: usize) -> Result<Self> {
        Self::with_slots(
            slots,
            self.load,
            self.compare,
            self.hash,
            self.allocator.clone(),
            self.hooks.clone(),
        )
    }

    /// Obtains a store of `slots` empty slots from `allocator`.
    fn allocate_store(allocator: &A, slots: usize) -> Result<Vec<Entry<V>>> {
        let mut store = allocator.allocate(slots).inspect_err(|error| {
            warn!(slots, %error, "slot store allocation failed");
        })?;
        store.resize_with(slots, || Entry::Empty);
        Ok(store)
    }

    /// Home slot of `value` in the current store.
    fn home_of(&self, value: &V) -> usize {
        probe::home((self.hash)(value), self.entries.len())
    }

    /// Slot index of the stored value equal to `value`.
    pub(crate) fn lookup(&self, value: &V) -> Option<usize> {
        probe::find(&self.entries, self.home_of(value), |resident| {
            (self.compare)(resident, value) == Ordering::Equal
        })
    }

    /// Inserts `value`, growing the store first if the set is full.
    ///
    /// Returns `Ok(true)` if the value was added and `Ok(false)` if an equal
    /// value was already present, in which case `value` is dropped.
    ///
    /// # Errors
    ///
    /// Any error of the growth step; the set is left unchanged.
    pub fn try_insert(&mut self, value: V) -> Result<bool> {
        if self.is_full() {
            self.try_resize(self.capacity().saturating_add(1))?;
        }

        if self.lookup(&value).is_some() {
            return Ok(false);
        }

        let home = self.home_of(&value);
        let placed = probe::place(&mut self.entries, home, value).is_ok();
        debug_assert!(placed, "slot store under its load factor has no free slot");
        if !placed {
            return Ok(false);
        }

        self.count = self.count.saturating_add(1);
        self.hooks.on_update(self.count);
        Ok(true)
    }

    /// Inserts `value`. Returns `true` if it was newly added, `false` if it was
    /// already present or the store could not grow.
    pub fn insert(&mut self, value: V) -> bool {
        self.try_insert(value).unwrap_or(false)
    }

    /// Removes the value equal to `value`. Returns whether one was present.
    pub fn remove(&mut self, value: &V) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the value equal to `value`.
    pub fn take(&mut self, value: &V) -> Option<V> {
        let index = self.lookup(value)?;
        let taken = self.entries.get_mut(index)?.take()?;
        self.count = self.count.saturating_sub(1);
        self.hooks.on_delete(self.count);
        Some(taken)
    }

    /// Returns true if the set contains a value equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.hooks.on_read();
        self.lookup(value).is_some()
    }

    /// Returns the stored value equal to `value`.
    #[must_use]
    pub fn get(&self, value: &V) -> Option<&V> {
        self.hooks.on_read();
        self.entries.get(self.lookup(value)?)?.value()
    }

    /// Greatest value according to the set's ordering. Scans every slot.
    #[must_use]
    pub fn max(&self) -> Option<&V> {
        self.hooks.on_read();
        self.iter().max_by(|a, b| (self.compare)(a, b))
    }

    /// Smallest value according to the set's ordering. Scans every slot.
    #[must_use]
    pub fn min(&self) -> Option<&V> {
        self.hooks.on_read();
        self.iter().min_by(|a, b| (self.compare)(a, b))
    }

    /// Returns the number of values in the set
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the set holds no value
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the next insertion has to grow the store first.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count >= config::max_count(self.capacity(), self.load)
    }

    /// Returns the number of slots in the store
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the load factor
    #[must_use]
    pub const fn load(&self) -> f64 {
        self.load
    }

    /// Returns the probe-length and occupancy statistics of the store.
    #[must_use]
    pub fn probe_stats(&self) -> ProbeStats {
        ProbeStats::of(&self.entries)
    }

    /// Rebuilds the store so that it can hold `capacity` values under the
    /// set's load factor. Asking for the current slot count is a no-op.
    ///
    /// Live values are moved into the new store in slot order; tombstones are
    /// dropped. If the new store cannot be allocated the set is left as it was.
    ///
    /// # Errors
    ///
    /// `CapacityOverflow` if `capacity / load` overflows, `ResizeRejected` if
    /// `capacity` cannot hold the current values, `AllocationFailure` if the
    /// new store cannot be allocated.
    #[allow(clippy::cast_precision_loss)]
    pub fn try_resize(&mut self, capacity: usize) -> Result<()> {
        let old_slots = self.capacity();
        if capacity == old_slots {
            return Ok(());
        }

        let rejected = SetError::ResizeRejected { requested: capacity, count: self.count };
        if capacity == 0 {
            warn!(requested = capacity, count = self.count, "resize rejected");
            return Err(rejected);
        }

        let required = config::required_slots(capacity, self.load)?;

        // The ladder cannot shrink below what the current values need.
        if (calculate_size(capacity) as f64) < self.count as f64 / self.load {
            warn!(requested = capacity, count = self.count, "resize rejected");
            return Err(rejected);
        }

        let new_slots = calculate_size(required);
        if config::max_count(new_slots, self.load) < self.count {
            warn!(requested = capacity, count = self.count, "resize rejected");
            return Err(rejected);
        }

        let store = Self::allocate_store(&self.allocator, new_slots)?;
        let mut old = mem::replace(&mut self.entries, store);

        let mut moved: usize = 0;
        for value in old.iter_mut().filter_map(Entry::take) {
            let home = probe::home((self.hash)(&value), new_slots);
            if probe::place(&mut self.entries, home, value).is_ok() {
                moved = moved.saturating_add(1);
            }
        }
        debug_assert_eq!(moved, self.count, "resize lost values");
        self.allocator.release(old);

        debug!(from = old_slots, to = new_slots, count = self.count, "resized slot store");
        self.hooks.on_resize(old_slots, new_slots);
        Ok(())
    }

    /// Rebuilds the store for `capacity` values. Returns `false`, leaving the set
    /// unchanged, if that is not possible.
    pub fn resize(&mut self, capacity: usize) -> bool {
        self.try_resize(capacity).is_ok()
    }

    /// Removes every value, keeping the store.
    pub fn clear(&mut self) {
        self.entries.fill_with(|| Entry::Empty);
        self.count = 0;
    }

    /// Removes every value, handing each one to `deallocator` in slot order.
    pub fn clear_with(&mut self, mut deallocator: impl FnMut(V)) {
        for value in self.entries.iter_mut().filter_map(Entry::take) {
            deallocator(value);
        }
        self.clear();
    }

    /// Destroys the set, handing each value to `deallocator` in slot order.
    pub fn free_with(mut self, deallocator: impl FnMut(V)) {
        self.clear_with(deallocator);
    }

    /// Returns a copy of the set with the same slot layout.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the copy's store cannot be allocated.
    pub fn copy_of(&self) -> Result<Self>
    where
        V: Clone,
    {
        self.copy_of_with(V::clone)
    }

    /// Returns a copy of the set, producing each value with `copy`.
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the copy's store cannot be allocated.
    pub fn copy_of_with(&self, mut copy: impl FnMut(&V) -> V) -> Result<Self> {
        let mut result = self.empty_like(self.capacity())?;
        for (target, source) in result.entries.iter_mut().zip(&self.entries) {
            *target = match source {
                Entry::Empty => Entry::Empty,
                Entry::Deleted => Entry::Deleted,
                Entry::Filled { value, distance } => {
                    Entry::Filled { value: copy(value), distance: *distance }
                }
            };
        }
        result.count = self.count;
        Ok(result)
    }

    /// Returns true if both sets hold the same values.
    ///
    /// Membership is checked with `other`'s hash and ordering.
    #[must_use]
    pub fn equals<B: SlotAllocator, K: SetHooks>(&self, other: &RobinHoodSet<V, B, K>) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.lookup(value).is_some())
    }

    /// Returns an iterator over the values in slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.entries, self.count)
    }

    /// The slot store, for cursors.
    pub(crate) fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }
}

impl<V, A: SlotAllocator, H: SetHooks> Drop for RobinHoodSet<V, A, H> {
    fn drop(&mut self) {
        self.allocator.release(mem::take(&mut self.entries));
    }
}

impl<V, A: SlotAllocator, H: SetHooks> fmt::Debug for RobinHoodSet<V, A, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RobinHoodSet")
            .field("capacity", &self.capacity())
            .field("count", &self.count)
            .field("load", &self.load)
            .finish_non_exhaustive()
    }
}

impl<V, A: SlotAllocator, H: SetHooks> PartialEq for RobinHoodSet<V, A, H> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<V, A: SlotAllocator, H: SetHooks> Eq for RobinHoodSet<V, A, H> {}

impl<V, A: SlotAllocator, H: SetHooks> Extend<V> for RobinHoodSet<V, A, H> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, V, A: SlotAllocator, H: SetHooks> IntoIterator for &'a RobinHoodSet<V, A, H> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
