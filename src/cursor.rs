//! Walking the values of a set.
//!
//! [`Iter`] is the plain std iterator. [`Cursor`] is a bidirectional position
//! over the live values in slot order: it can be moved forwards and backwards,
//! jumped by several steps or to a logical index, and reports whether it sits
//! on the first or last value.
//!
//! Both borrow the set immutably, so the set cannot be mutated (and its store
//! cannot be rebuilt) while either is alive.

use std::{cmp::Ordering, iter::FusedIterator, slice};

use crate::{RobinHoodSet, allocator::SlotAllocator, hooks::SetHooks, probe::Entry};

/// Iterator over the values of a set, in slot order.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Remaining slots
    entries: slice::Iter<'a, Entry<V>>,
    /// Live values not yet yielded
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    /// Iterates `entries`, which hold `count` live values.
    pub(crate) fn new(entries: &'a [Entry<V>], count: usize) -> Self {
        Self { entries: entries.iter(), remaining: count }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.entries.by_ref().find_map(Entry::value)?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.entries.by_ref().rev().find_map(Entry::value)?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(value)
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// A bidirectional position over the values of a set.
///
/// The cursor has a logical `index` in `0..len()` and sits on the slot holding
/// that value. `at_end` becomes true once the cursor tries to move past the
/// last value (or jumps there with `to_end`), `at_start` when it tries to move
/// before the first one (or starts there). On an empty set both always hold.
#[derive(Debug)]
pub struct Cursor<'a, V, A: SlotAllocator, H: SetHooks> {
    /// The set being walked
    target: &'a RobinHoodSet<V, A, H>,
    /// Slot of the current value
    cursor: usize,
    /// Logical position of the current value
    index: usize,
    /// Slot of the first value
    first: usize,
    /// Slot of the last value
    last: usize,
    /// Positioned at the first value
    start: bool,
    /// Moved past, or jumped to, the last value
    end: bool,
}

impl<V, A: SlotAllocator, H: SetHooks> Clone for Cursor<'_, V, A, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, A: SlotAllocator, H: SetHooks> Copy for Cursor<'_, V, A, H> {}

impl<'a, V, A: SlotAllocator, H: SetHooks> Cursor<'a, V, A, H> {
    /// Creates a cursor on the first value of `target`.
    #[must_use]
    pub fn new(target: &'a RobinHoodSet<V, A, H>) -> Self {
        let entries = target.entries();
        let first = entries.iter().position(Entry::is_filled).unwrap_or(0);
        let last = entries.iter().rposition(Entry::is_filled).unwrap_or(0);
        Self { target, cursor: first, index: 0, first, last, start: true, end: target.is_empty() }
    }

    /// Returns true if the cursor is at the start of the set.
    #[must_use]
    pub const fn at_start(&self) -> bool {
        self.target.is_empty() || self.start
    }

    /// Returns true if the cursor is at the end of the set.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.target.is_empty() || self.end
    }

    /// Moves to the first value.
    pub const fn to_start(&mut self) {
        if !self.target.is_empty() {
            self.cursor = self.first;
            self.index = 0;
            self.start = true;
            self.end = false;
        }
    }

    /// Moves to the last value.
    pub const fn to_end(&mut self) {
        if !self.target.is_empty() {
            self.cursor = self.last;
            self.index = self.target.len().saturating_sub(1);
            self.start = false;
            self.end = true;
        }
    }

    /// Whether `index` is the last logical position.
    const fn on_last(&self) -> bool {
        self.index.saturating_add(1) == self.target.len()
    }

    /// Moves to the next value. Returns false, flagging the end, if the cursor
    /// already sits on the last value.
    pub fn move_next(&mut self) -> bool {
        if self.end {
            return false;
        }
        if self.on_last() {
            self.end = true;
            return false;
        }

        let from = self.cursor.saturating_add(1);
        let Some(found) = self.target.entries().iter().skip(from).position(Entry::is_filled) else {
            self.end = true;
            return false;
        };

        self.start = false;
        self.cursor = from.saturating_add(found);
        self.index = self.index.saturating_add(1);
        true
    }

    /// Moves to the previous value. Returns false, flagging the start, if the
    /// cursor already sits on the first value.
    pub fn move_prev(&mut self) -> bool {
        if self.start {
            return false;
        }
        if self.index == 0 {
            self.start = true;
            return false;
        }

        let Some(found) =
            self.target.entries().iter().take(self.cursor).rposition(Entry::is_filled)
        else {
            self.start = true;
            return false;
        };

        self.end = false;
        self.cursor = found;
        self.index = self.index.saturating_sub(1);
        true
    }

    /// Moves `steps` values forward. Only moves, and returns true, if the whole
    /// distance can be covered.
    pub fn advance(&mut self, steps: usize) -> bool {
        if self.end {
            return false;
        }
        if self.on_last() {
            self.end = true;
            return false;
        }
        if steps == 0 || self.index.saturating_add(steps) >= self.target.len() {
            return false;
        }

        (0..steps).all(|_| self.move_next())
    }

    /// Moves `steps` values backward. Only moves, and returns true, if the whole
    /// distance can be covered.
    pub fn rewind(&mut self, steps: usize) -> bool {
        if self.start {
            return false;
        }
        if self.index == 0 {
            self.start = true;
            return false;
        }
        if steps == 0 || self.index < steps {
            return false;
        }

        (0..steps).all(|_| self.move_prev())
    }

    /// Moves to logical position `index`. Returns whether the cursor is there.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.target.len() {
            return false;
        }

        match self.index.cmp(&index) {
            Ordering::Greater => self.rewind(self.index.saturating_sub(index)),
            Ordering::Less => self.advance(index.saturating_sub(self.index)),
            Ordering::Equal => true,
        }
    }

    /// The value under the cursor, `None` on an empty set.
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        if self.target.is_empty() {
            return None;
        }
        self.target.entries().get(self.cursor)?.value()
    }

    /// Logical position of the cursor.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<V, A: SlotAllocator, H: SetHooks> RobinHoodSet<V, A, H> {
    /// Returns a cursor on the first value.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, V, A, H> {
        Cursor::new(self)
    }

    /// Returns a cursor on the last value.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, V, A, H> {
        let mut cursor = Cursor::new(self);
        cursor.to_end();
        cursor
    }
}
