//! Slot store entries and the robin-hood probe engine.
//!
//! A value's home slot is `hash % slots`. Probing walks forward from home,
//! wrapping at the end of the store. Every filled slot records how far it sits
//! from its home; insertion swaps the carried value with any resident that is
//! strictly closer to its own home, so probe lengths stay balanced.
//!
//! Deleted slots are tombstones: lookups walk past them, insertion reuses them.
//! An empty slot ends every probe sequence.

use std::mem;

/// A single slot of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Entry<V> {
    /// Never used since the store was allocated or cleared.
    Empty,
    /// Held a value that has since been removed.
    Deleted,
    /// Holds a live value `distance` slots past its home.
    Filled {
        /// The stored value.
        value: V,
        /// Probe distance from the value's home slot.
        distance: usize,
    },
}

impl<V> Entry<V> {
    /// Whether the slot holds a live value.
    pub(crate) const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled { .. })
    }

    /// The live value, if any.
    pub(crate) const fn value(&self) -> Option<&V> {
        match self {
            Self::Filled { value, .. } => Some(value),
            Self::Empty | Self::Deleted => None,
        }
    }

    /// Turns a filled slot into a tombstone and returns its value.
    pub(crate) fn take(&mut self) -> Option<V> {
        if !self.is_filled() {
            return None;
        }
        match mem::replace(self, Self::Deleted) {
            Self::Filled { value, .. } => Some(value),
            Self::Empty | Self::Deleted => None,
        }
    }
}

/// Home slot of `hash` in a store of `slots` slots.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn home(hash: u64, slots: usize) -> usize {
    // The remainder is below `slots`, so it fits back into a usize.
    hash.checked_rem(slots as u64).unwrap_or(0) as usize
}

/// Slot following `position`, wrapping at the end of the store.
const fn step(position: usize, slots: usize) -> usize {
    let next = position.wrapping_add(1);
    if next >= slots { 0 } else { next }
}

/// Places `value` by robin-hood insertion, starting at `home`.
///
/// The caller guarantees `value` is not already stored. Returns the value that
/// could not be placed if the store has no empty or deleted slot left, which a
/// set under its load factor never runs into.
pub(crate) fn place<V>(entries: &mut [Entry<V>], home: usize, value: V) -> Result<(), V> {
    let slots = entries.len();
    let mut position = home;
    let mut carried = value;
    let mut distance: usize = 0;

    for _ in 0..slots {
        let Some(entry) = entries.get_mut(position) else {
            break;
        };
        match entry {
            Entry::Empty | Entry::Deleted => {
                *entry = Entry::Filled { value: carried, distance };
                return Ok(());
            }
            Entry::Filled { value: resident, distance: resident_distance } => {
                // Equal distances never swap.
                if *resident_distance < distance {
                    mem::swap(resident, &mut carried);
                    mem::swap(resident_distance, &mut distance);
                }
            }
        }
        position = step(position, slots);
        distance = distance.wrapping_add(1);
    }

    Err(carried)
}

/// Index of the filled slot whose value satisfies `is_target`, probing from
/// `home` until an empty slot or after visiting every slot once.
pub(crate) fn find<V>(
    entries: &[Entry<V>],
    home: usize,
    mut is_target: impl FnMut(&V) -> bool,
) -> Option<usize> {
    let slots = entries.len();
    let mut position = home;

    for _ in 0..slots {
        match entries.get(position)? {
            Entry::Empty => return None,
            Entry::Deleted => {}
            Entry::Filled { value, .. } => {
                if is_target(value) {
                    return Some(position);
                }
            }
        }
        position = step(position, slots);
    }

    None
}

/// Occupancy and probe-length summary of a slot store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeStats {
    /// Slots holding a live value.
    pub filled: usize,
    /// Tombstones.
    pub deleted: usize,
    /// Slots never used since the last allocation or clear.
    pub empty: usize,
    /// Longest probe distance of any live value.
    pub max_distance: usize,
    /// Sum of the probe distances of all live values.
    pub total_distance: usize,
}

impl ProbeStats {
    /// Collects the statistics of `entries`.
    pub(crate) fn of<V>(entries: &[Entry<V>]) -> Self {
        entries.iter().fold(Self::default(), |mut stats, entry| {
            match entry {
                Entry::Empty => stats.empty = stats.empty.saturating_add(1),
                Entry::Deleted => stats.deleted = stats.deleted.saturating_add(1),
                Entry::Filled { distance, .. } => {
                    stats.filled = stats.filled.saturating_add(1);
                    stats.max_distance = stats.max_distance.max(*distance);
                    stats.total_distance = stats.total_distance.saturating_add(*distance);
                }
            }
            stats
        })
    }

    /// Average probe distance of the live values, 0 when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
    pub fn mean_distance(&self) -> f64 {
        if self.filled == 0 {
            return 0.0;
        }
        self.total_distance as f64 / self.filled as f64
    }
}
