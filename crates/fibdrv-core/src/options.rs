//! Engine options and configuration.

use crate::constants::DEFAULT_DIGIT_CAPACITY;

/// Options for the big-number engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum digits of any accumulation result (0 = unlimited).
    pub digit_capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            digit_capacity: DEFAULT_DIGIT_CAPACITY,
        }
    }
}

impl Options {
    /// Options with no digit capacity.
    #[must_use]
    pub fn unlimited() -> Self {
        Self { digit_capacity: 0 }
    }

    /// Options with the given digit capacity.
    #[must_use]
    pub fn with_digit_capacity(digit_capacity: usize) -> Self {
        Self { digit_capacity }
    }

    /// The capacity as an optional bound, `None` when unlimited.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        (self.digit_capacity > 0).then_some(self.digit_capacity)
    }
}
