//! Construction parameters for [`RobinHoodSet`](crate::RobinHoodSet).

use crate::{
    capacity::calculate_size,
    error::{Result, SetError},
};

/// Element capacity used by [`SetConfig::default`].
pub const DEFAULT_CAPACITY: usize = 64;

/// Load factor used by [`SetConfig::default`].
pub const DEFAULT_LOAD: f64 = 0.75;

/// Requested element capacity and load factor of a set.
///
/// The slot store is sized so that `capacity` elements fit under `load`, then
/// rounded up along the [capacity ladder](crate::capacity::PRIME_LADDER).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetConfig {
    /// Number of elements the set should hold before its first resize.
    pub capacity: usize,
    /// Maximum ratio of elements to slots, in the open interval (0, 1).
    pub load: f64,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY, load: DEFAULT_LOAD }
    }
}

impl SetConfig {
    /// Creates a configuration from an element capacity and a load factor.
    #[must_use]
    pub const fn new(capacity: usize, load: f64) -> Self {
        Self { capacity, load }
    }

    /// Replaces the element capacity
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the load factor
    #[must_use]
    pub const fn with_load(mut self, load: f64) -> Self {
        self.load = load;
        self
    }

    /// Validates the configuration and returns the slot count it maps to.
    ///
    /// # Errors
    ///
    /// `ZeroCapacity` if `capacity` is zero, `InvalidLoad` if `load` is not
    /// strictly between 0 and 1, `CapacityOverflow` if `capacity / load` does
    /// not fit in a `usize`.
    pub fn slots(&self) -> Result<usize> {
        if self.capacity == 0 {
            return Err(SetError::ZeroCapacity);
        }
        check_load(self.load)?;
        Ok(calculate_size(required_slots(self.capacity, self.load)?))
    }
}

/// Rejects load factors outside (0, 1), NaN included.
pub(crate) fn check_load(load: f64) -> Result<()> {
    if load > 0.0 && load < 1.0 { Ok(()) } else { Err(SetError::InvalidLoad) }
}

/// Number of slots needed to hold `capacity` elements under `load`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn required_slots(capacity: usize, load: f64) -> Result<usize> {
    let required = (capacity as f64 / load).ceil();
    if required >= usize::MAX as f64 {
        return Err(SetError::CapacityOverflow);
    }
    Ok(required as usize)
}

/// Largest element count a store of `slots` slots may hold under `load`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn max_count(slots: usize, load: f64) -> usize {
    (slots as f64 * load).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SetConfig::default();
        assert_eq!(config.capacity, 64);
        assert!((config.load - 0.75).abs() < f64::EPSILON);
        // 64 / 0.75 = 85.3 -> 97
        assert_eq!(config.slots(), Ok(97));
    }

    #[test]
    fn test_builder_methods() {
        let config = SetConfig::default().with_capacity(10).with_load(0.6);
        assert_eq!(config, SetConfig::new(10, 0.6));
        assert_eq!(config.slots(), Ok(53));
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(SetConfig::new(0, 0.5).slots(), Err(SetError::ZeroCapacity));
        assert_eq!(SetConfig::new(10, 0.0).slots(), Err(SetError::InvalidLoad));
        assert_eq!(SetConfig::new(10, 1.0).slots(), Err(SetError::InvalidLoad));
        assert_eq!(SetConfig::new(10, -0.5).slots(), Err(SetError::InvalidLoad));
        assert_eq!(SetConfig::new(10, f64::NAN).slots(), Err(SetError::InvalidLoad));
        assert_eq!(SetConfig::new(usize::MAX, 0.5).slots(), Err(SetError::CapacityOverflow));
    }

    #[test]
    fn test_max_count_floors() {
        assert_eq!(max_count(53, 0.6), 31);
        assert_eq!(max_count(53, 0.5), 26);
        assert_eq!(max_count(97, 0.75), 72);
    }
}
