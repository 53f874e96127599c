//! # Robin-hood hash set
//!
//! A Rust implementation of an unordered set backed by an open-addressing hash
//! table with robin-hood probing.
//!
//! Values are stored directly in a slot store whose size is picked from a
//! ladder of primes. On collision, an inserted value walks forward and takes the
//! slot of any resident sitting closer to its own home, which keeps probe
//! lengths even across the table. Removal leaves a tombstone that later
//! insertions reuse; the store is rebuilt (and tombstones dropped) whenever the
//! set outgrows its load factor or is resized explicitly.
//!
//! The element ordering and hash are plain functions bound at construction.
//! Allocation of slot stores goes through a [`SlotAllocator`] and every
//! operation can be observed through [`SetHooks`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use robinset::RobinHoodSet;
//!
//! // Room for 10 values at 60% load before the first resize.
//! let mut set: RobinHoodSet<u64> = RobinHoodSet::new(10, 0.6, u64::cmp, |v| *v).unwrap();
//!
//! for value in [5, 3, 9, 3, 7] {
//!     set.insert(value);
//! }
//!
//! assert_eq!(set.len(), 4);
//! assert!(set.contains(&3));
//! assert!(!set.contains(&100));
//!
//! assert!(set.remove(&3));
//! assert!(!set.contains(&3));
//! ```
//!
//! ## Set Algebra
//!
//! ```rust
//! use robinset::RobinHoodSet;
//!
//! let mut a = RobinHoodSet::with_defaults(8, 0.75).unwrap();
//! let mut b = RobinHoodSet::with_defaults(8, 0.75).unwrap();
//! a.extend([1, 2, 3]);
//! b.extend([3, 4, 5]);
//!
//! assert_eq!(a.union(&b).unwrap().len(), 5);
//! assert_eq!(a.intersection(&b).unwrap().len(), 1);
//! assert_eq!(a.difference(&b).unwrap().len(), 2);
//! assert_eq!(a.symmetric_difference(&b).unwrap().len(), 4);
//! assert!(!a.is_disjoint(&b));
//! ```
//!
//! ## Cursors
//!
//! ```rust
//! use robinset::RobinHoodSet;
//!
//! let mut set = RobinHoodSet::with_defaults(8, 0.75).unwrap();
//! set.extend(["a", "b", "c"]);
//!
//! let mut cursor = set.cursor_end();
//! let mut seen: Vec<&&str> = Vec::new();
//! while !cursor.at_start() {
//!     seen.extend(cursor.value());
//!     cursor.move_prev();
//! }
//! assert_eq!(seen.len(), 3);
//! ```

/// Set algebra operations
mod algebra;
/// Allocation strategy for slot stores
pub mod allocator;
/// Capacity ladder of table sizes
pub mod capacity;
/// Construction parameters
mod config;
/// Cursor and iterator over set values
mod cursor;
/// Error and result types
mod error;
/// The robin-hood set itself
mod hash_set;
/// Instrumentation hooks
pub mod hooks;
/// Slot entries and the probe engine
mod probe;
/// Default element functions and helpers
pub mod utils;

pub use allocator::{GlobalSlots, SlotAllocator};
pub use config::{DEFAULT_CAPACITY, DEFAULT_LOAD, SetConfig};
pub use cursor::{Cursor, Iter};
pub use error::{Result, SetError};
pub use hash_set::{CompareFn, HashFn, RobinHoodSet};
pub use hooks::{NoHooks, SetHooks};
pub use probe::ProbeStats;
