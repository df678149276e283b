//! Arbitrary-precision non-negative integers stored as decimal digits.
//!
//! Digits are kept as ASCII bytes, most significant first, so the text form
//! of a number is a plain borrow of its storage. Only the value zero may be
//! the single digit `0`; no other value carries a leading zero.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::FibError;

/// A non-negative integer as a sequence of decimal digits.
///
/// # Example
/// ```
/// use fibdrv_core::bignum::BigNumber;
/// let a: BigNumber = "999".parse().unwrap();
/// let b = BigNumber::one();
/// assert_eq!(a.add(&b).as_bytes(), b"1000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigNumber {
    digits: Vec<u8>,
}

impl BigNumber {
    /// The value 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_digit(0)
    }

    /// The value 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_digit(1)
    }

    /// Single-digit number, used for the base cases F(0) and F(1).
    ///
    /// # Panics
    /// Panics if `d` is not a decimal digit.
    #[must_use]
    pub fn from_digit(d: u8) -> Self {
        assert!(d < 10, "{d} is not a decimal digit");
        Self {
            digits: vec![b'0' + d],
        }
    }

    /// Number of decimal digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: zero is stored as a single digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [b'0']
    }

    /// Decimal text, most significant digit first, no sign, no terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }

    /// Consume the number and return its decimal text.
    #[must_use]
    pub fn into_text(self) -> Vec<u8> {
        self.digits
    }

    /// Schoolbook addition into a fresh number.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self {
            digits: Vec::with_capacity(self.len().max(other.len()) + 1),
        };
        add_digits(self, other, &mut out);
        out
    }

    /// Schoolbook addition into `out`, reusing its allocation.
    ///
    /// With `capacity = Some(c)` the result must fit in `c` digits; otherwise
    /// `CapacityExceeded` is returned and `out` is left untouched.
    pub fn add_into(
        a: &Self,
        b: &Self,
        out: &mut Self,
        capacity: Option<usize>,
    ) -> Result<(), FibError> {
        if let Some(capacity) = capacity {
            let width = a.len().max(b.len());
            if width >= capacity {
                let needed = width + usize::from(carries_out(a, b));
                if needed > capacity {
                    return Err(FibError::CapacityExceeded { needed, capacity });
                }
            }
        }
        add_digits(a, b, out);
        Ok(())
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, other: &BigNumber) -> BigNumber {
        BigNumber::add(self, other)
    }
}

/// Write `a + b` into `out`, least significant digit first with carry.
fn add_digits(a: &BigNumber, b: &BigNumber, out: &mut BigNumber) {
    let (a, b) = (&a.digits, &b.digits);
    let width = a.len().max(b.len());
    let (mut i, mut j) = (a.len(), b.len());

    out.digits.clear();
    out.digits.resize(width + 1, b'0');

    let mut carry = 0u8;
    for slot in out.digits[1..].iter_mut().rev() {
        let mut sum = carry;
        if i > 0 {
            i -= 1;
            sum += a[i] - b'0';
        }
        if j > 0 {
            j -= 1;
            sum += b[j] - b'0';
        }
        *slot = b'0' + sum % 10;
        carry = sum / 10;
    }

    if carry == 0 {
        out.digits.remove(0);
    } else {
        out.digits[0] = b'0' + carry;
    }
}

/// Whether `a + b` has one more digit than its widest operand.
fn carries_out(a: &BigNumber, b: &BigNumber) -> bool {
    let mut ra = a.digits.iter().rev();
    let mut rb = b.digits.iter().rev();
    let mut carry = 0u8;
    loop {
        let (da, db) = (ra.next(), rb.next());
        if da.is_none() && db.is_none() {
            return carry == 1;
        }
        let sum = carry + da.map_or(0, |d| d - b'0') + db.map_or(0, |d| d - b'0');
        carry = sum / 10;
    }
}

impl FromStr for BigNumber {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let canonical = !bytes.is_empty()
            && bytes.iter().all(u8::is_ascii_digit)
            && (bytes.len() == 1 || bytes[0] != b'0');
        if !canonical {
            return Err(FibError::InvalidNumber(s.to_string()));
        }
        Ok(Self {
            digits: bytes.to_vec(),
        })
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = std::str::from_utf8(&self.digits).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> BigNumber {
        s.parse().unwrap()
    }

    #[test]
    fn base_digits() {
        assert_eq!(BigNumber::zero().as_bytes(), b"0");
        assert_eq!(BigNumber::one().as_bytes(), b"1");
        assert!(BigNumber::zero().is_zero());
        assert!(!BigNumber::one().is_zero());
        assert_eq!(BigNumber::default(), BigNumber::zero());
    }

    #[test]
    fn add_without_carry() {
        assert_eq!(num("21").add(&num("34")).to_string(), "55");
        assert_eq!(num("0").add(&num("0")).to_string(), "0");
        assert_eq!(num("0").add(&num("7")).to_string(), "7");
    }

    #[test]
    fn add_grows_by_one_digit() {
        let sum = num("999").add(&num("1"));
        assert_eq!(sum.as_bytes(), b"1000");
        assert_eq!(sum.len(), 4);
    }

    #[test]
    fn add_operator() {
        assert_eq!(&num("89") + &num("144"), num("233"));
    }

    #[test]
    fn add_uneven_lengths() {
        assert_eq!(num("1").add(&num("99999")).to_string(), "100000");
        assert_eq!(num("123456789").add(&num("987")).to_string(), "123457776");
    }

    #[test]
    fn add_into_reuses_buffer() {
        let mut out = num("123456789012345678901234567890");
        let cap_before = out.digits.capacity();
        BigNumber::add_into(&num("5"), &num("8"), &mut out, None).unwrap();
        assert_eq!(out.as_bytes(), b"13");
        assert_eq!(out.digits.capacity(), cap_before);
    }

    #[test]
    fn add_into_rejects_overflowing_capacity() {
        let mut out = num("42");
        let err = BigNumber::add_into(&num("999"), &num("1"), &mut out, Some(3)).unwrap_err();
        assert_eq!(
            err,
            FibError::CapacityExceeded {
                needed: 4,
                capacity: 3
            }
        );
        assert_eq!(out.as_bytes(), b"42");
    }

    #[test]
    fn add_into_accepts_exact_fit() {
        let mut out = BigNumber::zero();
        BigNumber::add_into(&num("998"), &num("1"), &mut out, Some(3)).unwrap();
        assert_eq!(out.as_bytes(), b"999");
    }

    #[test]
    fn carries_out_detects_growth() {
        assert!(carries_out(&num("5"), &num("5")));
        assert!(!carries_out(&num("4"), &num("5")));
        assert!(carries_out(&num("1"), &num("999")));
    }

    #[test]
    fn parse_rejects_non_canonical() {
        assert!("".parse::<BigNumber>().is_err());
        assert!("007".parse::<BigNumber>().is_err());
        assert!("-1".parse::<BigNumber>().is_err());
        assert!("12a".parse::<BigNumber>().is_err());
        assert!("0".parse::<BigNumber>().is_ok());
    }

    #[test]
    fn display_and_text_agree() {
        let n = num("354224848179261915075");
        assert_eq!(n.to_string().as_bytes(), n.as_bytes());
        assert_eq!(n.clone().into_text(), n.as_bytes());
    }
}
