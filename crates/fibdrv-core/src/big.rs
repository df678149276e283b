//! Exact Fibonacci values by linear big-number accumulation.
//!
//! The read path repeats `(prev, curr) := (curr, prev + curr)` k-1 times.
//! It is intentionally O(k); fast doubling lives only on the fixed-width
//! benchmark path in [`crate::fixed`].

use tracing::trace;

use crate::bignum::BigNumber;
use crate::error::FibError;
use crate::options::Options;

/// Linear accumulation engine producing F(k) as a [`BigNumber`].
///
/// # Example
/// ```
/// use fibdrv_core::big::BigFibEngine;
/// use fibdrv_core::options::Options;
///
/// let engine = BigFibEngine::new(Options::default());
/// let f100 = engine.compute(100).unwrap();
/// assert_eq!(f100.to_string(), "354224848179261915075");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BigFibEngine {
    options: Options,
}

impl BigFibEngine {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compute F(k).
    ///
    /// Three buffers rotate through the loop: the sum is written into the
    /// scratch buffer, which becomes `curr`, and the buffer two steps back
    /// becomes the next scratch.
    pub fn compute(&self, k: u64) -> Result<BigNumber, FibError> {
        match k {
            0 => return Ok(BigNumber::zero()),
            1 => return Ok(BigNumber::one()),
            _ => {}
        }

        let capacity = self.options.capacity();
        let mut prev = BigNumber::zero();
        let mut curr = BigNumber::one();
        let mut scratch = BigNumber::zero();

        for _ in 1..k {
            BigNumber::add_into(&prev, &curr, &mut scratch, capacity)?;
            std::mem::swap(&mut prev, &mut curr);
            std::mem::swap(&mut curr, &mut scratch);
        }

        trace!(k, digits = curr.len(), "accumulated");
        Ok(curr)
    }

    /// Decimal text of F(k).
    pub fn compute_text(&self, k: u64) -> Result<Vec<u8>, FibError> {
        self.compute(k).map(BigNumber::into_text)
    }
}
