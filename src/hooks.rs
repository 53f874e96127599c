//! Instrumentation hooks of the set.
//!
//! Hooks observe a set without taking part in its logic: they are called after
//! the corresponding operation has completed successfully and cannot veto or
//! alter it. [`NoHooks`] is the default and compiles away.

use std::fmt::Debug;

/// Callbacks invoked after the set's create, read, update, delete and resize
/// operations.
pub trait SetHooks: Clone + Debug {
    /// A set with `slots` slots was constructed.
    fn on_create(&self, _slots: usize) {}

    /// A lookup (`contains`, `get`, `min`, `max`) ran.
    fn on_read(&self) {}

    /// A new element was inserted; `count` is the element count afterwards.
    fn on_update(&self, _count: usize) {}

    /// An element was removed; `count` is the element count afterwards.
    fn on_delete(&self, _count: usize) {}

    /// The slot store was rebuilt from `from` to `to` slots.
    fn on_resize(&self, _from: usize, _to: usize) {}
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl SetHooks for NoHooks {}
