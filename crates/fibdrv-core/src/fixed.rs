//! Fixed-width Fibonacci variants used for timing comparisons.
//!
//! All three compute F(k) in `i64` arithmetic. Results are exact up to
//! [`MAX_EXACT_FIXED_INDEX`](crate::constants::MAX_EXACT_FIXED_INDEX); past it
//! every operation wraps modulo 2^64, so the variants still agree with each
//! other while no longer being exact.
//!
//! The doubling variants use
//!   F(2m)   = F(m) * (2*F(m+1) - F(m))
//!   F(2m+1) = F(m)^2 + F(m+1)^2
//! scanning the bits of k from most to least significant.

use std::fmt;
use std::str::FromStr;

use crate::error::FibError;

/// A fixed-width Fibonacci value. Not exact beyond F(92).
pub type FixedValue = i64;

/// A fixed-width Fibonacci algorithm.
pub trait FixedFib: Send + Sync {
    /// Compute F(k), wrapping on overflow.
    fn compute(&self, k: u32) -> FixedValue;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;
}

/// Naive O(k) iteration keeping the last two values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl FixedFib for Iterative {
    fn compute(&self, k: u32) -> FixedValue {
        if k < 2 {
            return FixedValue::from(k);
        }
        let (mut f0, mut f1): (FixedValue, FixedValue) = (0, 1);
        for _ in 2..=k {
            let next = f0.wrapping_add(f1);
            f0 = f1;
            f1 = next;
        }
        f1
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}

/// Fast doubling with a fixed scan starting at bit 31.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastDoubling;

impl FastDoubling {
    /// Bits scanned for `k`: always the full 32-bit word.
    fn scan_bits(_k: u32) -> u32 {
        u32::BITS
    }

    /// Doubling steps performed for `k`.
    #[must_use]
    pub fn iterations(k: u32) -> u32 {
        if k < 2 {
            0
        } else {
            Self::scan_bits(k)
        }
    }
}

impl FixedFib for FastDoubling {
    fn compute(&self, k: u32) -> FixedValue {
        if k < 2 {
            return FixedValue::from(k);
        }
        doubling(k, Self::scan_bits(k))
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}

/// Fast doubling starting at the highest set bit of k.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastDoublingClz;

impl FastDoublingClz {
    /// Bits scanned for `k`: its bit length.
    fn scan_bits(k: u32) -> u32 {
        u32::BITS - k.leading_zeros()
    }

    /// Doubling steps performed for `k`.
    #[must_use]
    pub fn iterations(k: u32) -> u32 {
        if k < 2 {
            0
        } else {
            Self::scan_bits(k)
        }
    }
}

impl FixedFib for FastDoublingClz {
    fn compute(&self, k: u32) -> FixedValue {
        if k < 2 {
            return FixedValue::from(k);
        }
        doubling(k, Self::scan_bits(k))
    }

    fn name(&self) -> &'static str {
        "FastDoublingClz"
    }
}

/// One doubling step per bit, from bit `bits - 1` down to bit 0. Leading zero
/// bits keep `(F(0), F(1))` unchanged, so any `bits` at or above the bit
/// length of k gives the same result.
fn doubling(k: u32, bits: u32) -> FixedValue {
    let (mut fk, mut fk1): (FixedValue, FixedValue) = (0, 1);
    for bit in (0..bits).rev() {
        let f2k = fk.wrapping_mul(fk1.wrapping_mul(2).wrapping_sub(fk));
        let f2k1 = fk.wrapping_mul(fk).wrapping_add(fk1.wrapping_mul(fk1));
        if (k >> bit) & 1 == 1 {
            fk = f2k1;
            fk1 = f2k.wrapping_add(f2k1);
        } else {
            fk = f2k;
            fk1 = f2k1;
        }
    }
    fk
}

/// Selects one of the fixed-width algorithms.
///
/// The discriminants are the write selectors of the session protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Iterative = 1,
    FastDoubling = 2,
    FastDoublingClz = 3,
}

impl Variant {
    /// All variants in selector order.
    pub const ALL: [Variant; 3] = [
        Variant::Iterative,
        Variant::FastDoubling,
        Variant::FastDoublingClz,
    ];

    /// Map a write selector to a variant.
    #[must_use]
    pub fn from_selector(selector: u64) -> Option<Self> {
        match selector {
            1 => Some(Self::Iterative),
            2 => Some(Self::FastDoubling),
            3 => Some(Self::FastDoublingClz),
            _ => None,
        }
    }

    #[must_use]
    pub fn selector(self) -> u64 {
        self as u64
    }

    /// Look a variant up by its command-line name.
    pub fn from_name(name: &str) -> Result<Self, FibError> {
        match name {
            "iter" | "iterative" => Ok(Self::Iterative),
            "fast" | "fast-doubling" => Ok(Self::FastDoubling),
            "clz" | "ctz" | "fast-doubling-clz" => Ok(Self::FastDoublingClz),
            _ => Err(FibError::Config(format!("unknown variant: {name}"))),
        }
    }

    /// The algorithm behind this variant.
    #[must_use]
    pub fn engine(self) -> &'static dyn FixedFib {
        match self {
            Self::Iterative => &Iterative,
            Self::FastDoubling => &FastDoubling,
            Self::FastDoublingClz => &FastDoublingClz,
        }
    }

    #[must_use]
    pub fn compute(self, k: u32) -> FixedValue {
        self.engine().compute(k)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.engine().name()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIB_TABLE, MAX_EXACT_FIXED_INDEX};

    #[test]
    fn all_variants_exact_in_range() {
        for k in 0..=MAX_EXACT_FIXED_INDEX {
            for variant in Variant::ALL {
                assert_eq!(
                    variant.compute(k),
                    FIB_TABLE[k as usize],
                    "{variant} at k={k}"
                );
            }
        }
    }

    #[test]
    fn variants_agree_past_overflow() {
        for k in 93..=2_000 {
            let it = Iterative.compute(k);
            assert_eq!(FastDoubling.compute(k), it, "FastDoubling at k={k}");
            assert_eq!(FastDoublingClz.compute(k), it, "FastDoublingClz at k={k}");
        }
    }

    #[test]
    fn wraparound_is_twos_complement() {
        // F(93) = 12200160415121876738, reduced modulo 2^64 into i64.
        assert_eq!(Iterative.compute(93), -6_246_583_658_587_674_878);
        // F(100) mod 2^64
        assert_eq!(FastDoubling.compute(100), 3_736_710_778_780_434_371);
    }

    #[test]
    fn clz_scan_is_shorter() {
        assert_eq!(FastDoubling::iterations(10), 32);
        assert_eq!(FastDoublingClz::iterations(10), 4);
        assert_eq!(FastDoublingClz::iterations(500), 9);
        assert_eq!(FastDoublingClz::iterations(1), 0);
        assert_eq!(FastDoublingClz::iterations(u32::MAX), 32);
    }

    #[test]
    fn scan_below_bit_length_loses_high_bits() {
        // 10 = 0b1010: starting one bit short computes F(0b010) instead.
        assert_eq!(doubling(10, FastDoublingClz::scan_bits(10)), 55);
        assert_eq!(doubling(10, FastDoublingClz::scan_bits(10) - 1), 1);
        assert_eq!(doubling(10, FastDoubling::scan_bits(10)), 55);
    }

    #[test]
    fn selectors_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_selector(variant.selector()), Some(variant));
        }
        assert_eq!(Variant::from_selector(0), None);
        assert_eq!(Variant::from_selector(99), None);
    }

    #[test]
    fn names() {
        assert_eq!(Variant::from_name("iter").unwrap(), Variant::Iterative);
        assert_eq!("ctz".parse::<Variant>().unwrap(), Variant::FastDoublingClz);
        assert_eq!(Variant::FastDoubling.to_string(), "FastDoubling");
        assert!(matches!(
            Variant::from_name("matrix"),
            Err(FibError::Config(_))
        ));
    }
}
