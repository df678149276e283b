//! Error type shared by the engines and the session protocol.

/// Error type for fibdrv operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Another session already holds the device.
    #[error("device is busy: another session is open")]
    Busy,

    /// An addition result would not fit the configured digit capacity.
    #[error("result needs {needed} digits but capacity is {capacity}")]
    CapacityExceeded {
        /// Digits the result would have needed.
        needed: usize,
        /// Configured digit capacity.
        capacity: usize,
    },

    /// Text that is not a canonical non-negative decimal number.
    #[error("invalid decimal number: {0:?}")]
    InvalidNumber(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
