//! Constants shared by the engines and the session protocol.

/// Upper bound of the session position domain.
pub const MAX_POSITION: i64 = 500;

/// Largest index whose Fibonacci value fits in an `i64`.
/// F(92) = 7540113804746346429, F(93) overflows `i64::MAX`.
pub const MAX_EXACT_FIXED_INDEX: u32 = 92;

/// Default digit capacity of a single accumulation step.
///
/// F(500) has 105 digits, so the default covers every reachable position.
pub const DEFAULT_DIGIT_CAPACITY: usize = 128;

/// Value returned by a write with an unrecognized variant selector.
pub const UNKNOWN_SELECTOR_RESULT: u64 = 1;

/// Exact Fibonacci values for n = 0..=92.
pub const FIB_TABLE: [i64; 93] = {
    let mut table = [0i64; 93];
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes of the `fibdrv` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The device already has an open session.
    pub const ERROR_BUSY: i32 = 2;
    /// A result did not fit the configured digit capacity.
    pub const ERROR_CAPACITY: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
