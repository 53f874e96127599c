//! The error and result types of this crate.
//!
//! Inserting a duplicate or removing an absent value are not errors: those
//! report `false` (or `None`) and leave the set untouched. `SetError` covers
//! the failures that stop an operation from happening at all.

use std::{error, fmt, result};

/// Reasons a set operation could not be carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError {
    /// A set was requested with room for zero elements.
    ZeroCapacity,
    /// The load factor is not inside the open interval (0, 1).
    InvalidLoad,
    /// `capacity / load` does not fit in the addressable size range.
    CapacityOverflow,
    /// The allocation strategy could not provide the slot store.
    AllocationFailure {
        /// Number of slots that were requested.
        slots: usize,
    },
    /// The requested capacity cannot hold the elements currently stored.
    ResizeRejected {
        /// Capacity passed to the resize.
        requested: usize,
        /// Number of elements held at the time of the request.
        count: usize,
    },
}

impl error::Error for SetError {}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be greater than zero"),
            Self::InvalidLoad => write!(f, "load factor must lie strictly between 0 and 1"),
            Self::CapacityOverflow => write!(f, "capacity / load overflows usize"),
            Self::AllocationFailure { slots } => {
                write!(f, "failed to allocate a store of {slots} slots")
            }
            Self::ResizeRejected { requested, count } => {
                write!(f, "capacity {requested} cannot hold the {count} elements currently stored")
            }
        }
    }
}

/// Result type of this crate.
pub type Result<T> = result::Result<T, SetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SetError::AllocationFailure { slots: 97 }.to_string(),
            "failed to allocate a store of 97 slots"
        );
        assert_eq!(
            SetError::ResizeRejected { requested: 3, count: 40 }.to_string(),
            "capacity 3 cannot hold the 40 elements currently stored"
        );
    }
}
