//! Device exclusivity and session state.

use std::hint::black_box;
use std::time::Instant;

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, trace, warn};

use fibdrv_core::big::BigFibEngine;
use fibdrv_core::bignum::BigNumber;
use fibdrv_core::constants::{MAX_POSITION, UNKNOWN_SELECTOR_RESULT};
use fibdrv_core::error::FibError;
use fibdrv_core::fixed::Variant;
use fibdrv_core::options::Options;

use crate::protocol::Whence;

/// The shared endpoint sessions are opened against.
///
/// Exclusivity is a mutex taken with `try_lock` on open and held by the
/// session until it is closed or dropped.
pub struct Device {
    lock: Mutex<()>,
    engine: BigFibEngine,
}

impl Device {
    /// Create a device whose reads use the given engine options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            lock: Mutex::new(()),
            engine: BigFibEngine::new(options),
        }
    }

    /// Open the single session. Fails immediately with `Busy` if one is open.
    pub fn open(&self) -> Result<Session<'_>, FibError> {
        let Some(guard) = self.lock.try_lock() else {
            warn!("device is in use");
            return Err(FibError::Busy);
        };
        debug!("session opened");
        Ok(Session {
            engine: &self.engine,
            _guard: guard,
            position: 0,
        })
    }

    /// Whether a session currently holds the device.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock.is_locked()
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        self.engine.options()
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// An open session: the current position plus the device lock.
pub struct Session<'d> {
    engine: &'d BigFibEngine,
    _guard: MutexGuard<'d, ()>,
    position: i64,
}

impl Session<'_> {
    /// Current position, always within `[0, MAX_POSITION]`.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Move the position and return it. Out-of-range targets are clamped.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        let candidate = match whence {
            Whence::Start => offset,
            Whence::Current => self.position.saturating_add(offset),
            Whence::End => MAX_POSITION.saturating_sub(offset),
        };
        self.position = candidate.clamp(0, MAX_POSITION);
        debug!(offset, ?whence, position = self.position, "seek");
        self.position
    }

    /// Seek with a raw whence code (0 = start, 1 = current, 2 = end).
    /// An unknown code lands at position 0.
    pub fn seek_raw(&mut self, offset: i64, whence: i32) -> i64 {
        if let Some(whence) = Whence::from_raw(whence) {
            return self.seek(offset, whence);
        }
        warn!(whence, "unknown whence, resetting position");
        self.position = 0;
        self.position
    }

    /// Time the variant named by `selector` at the current position and
    /// return the elapsed nanoseconds.
    ///
    /// An unrecognized selector computes nothing and returns
    /// [`UNKNOWN_SELECTOR_RESULT`].
    pub fn write(&self, selector: u64) -> u64 {
        match Variant::from_selector(selector) {
            Some(variant) => self.benchmark(variant),
            None => {
                warn!(selector, "unknown write selector");
                UNKNOWN_SELECTOR_RESULT
            }
        }
    }

    /// Time one run of `variant` at the current position.
    pub fn benchmark(&self, variant: Variant) -> u64 {
        let engine = variant.engine();
        let k = self.index();

        let start = Instant::now();
        black_box(engine.compute(black_box(k)));
        let elapsed = start.elapsed();

        trace!(k, variant = engine.name(), ?elapsed, "benchmarked");
        u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Decimal text of F(position).
    pub fn read(&self) -> Result<Vec<u8>, FibError> {
        self.engine.compute_text(self.big_index())
    }

    /// F(position) as a number.
    pub fn read_number(&self) -> Result<BigNumber, FibError> {
        self.engine.compute(self.big_index())
    }

    /// Release the device. Always succeeds.
    pub fn close(self) {}

    // Positions stay within [0, MAX_POSITION], so both conversions succeed.
    fn index(&self) -> u32 {
        u32::try_from(self.position).unwrap_or(0)
    }

    fn big_index(&self) -> u64 {
        u64::try_from(self.position).unwrap_or(0)
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        debug!(position = self.position, "session closed");
    }
}
