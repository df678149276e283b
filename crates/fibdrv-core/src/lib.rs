//! # fibdrv-core
//!
//! Arithmetic engine behind the fibdrv session protocol: a decimal
//! `BigNumber`, the linear `BigFibEngine` used to read exact values, and the
//! three fixed-width variants used for timing comparisons.

pub mod big;
pub mod bignum;
pub mod constants;
pub mod error;
pub mod fixed;
pub mod options;

// Re-exports
pub use big::BigFibEngine;
pub use bignum::BigNumber;
pub use constants::{
    exit_codes, DEFAULT_DIGIT_CAPACITY, FIB_TABLE, MAX_EXACT_FIXED_INDEX, MAX_POSITION,
    UNKNOWN_SELECTOR_RESULT,
};
pub use error::FibError;
pub use fixed::{FastDoubling, FastDoublingClz, FixedFib, FixedValue, Iterative, Variant};
pub use options::Options;

