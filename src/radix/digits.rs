//! Digit sequences and their radix.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BitError, Result};

/// Capacity of a [`DigitSeq`]: a `u32` needs at most 32 binary digits.
pub const MAX_DIGITS: usize = 32;

/// Base of a positional numeral system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Radix {
    Binary,
    Decimal,
}

impl Radix {
    /// The numeric base (2 or 10).
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = BitError;

    fn try_from(radix: u32) -> std::result::Result<Self, Self::Error> {
        match radix {
            2 => Ok(Radix::Binary),
            10 => Ok(Radix::Decimal),
            _ => Err(BitError::InvalidRadix { radix }),
        }
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.base()
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "radix {}", self.base())
    }
}

/// Digits of a non-negative integer in one radix, most significant first.
///
/// The digits live right-aligned in a fixed array of [`MAX_DIGITS`] slots;
/// the slots before `start` are always zero. A sequence is never empty.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DigitSeqRepr", into = "DigitSeqRepr"))]
pub struct DigitSeq {
    digits: [u8; MAX_DIGITS],
    start: usize,
    radix: Radix,
}

impl DigitSeq {
    /// Wraps a buffer whose last `used` slots hold the digits.
    ///
    /// `used` is clamped to `1..=MAX_DIGITS`; a zero-length sequence reads
    /// as the single digit `0`.
    pub(crate) fn from_tail(digits: [u8; MAX_DIGITS], used: usize, radix: Radix) -> Self {
        let used = used.clamp(1, MAX_DIGITS);

        Self {
            digits,
            start: MAX_DIGITS - used,
            radix,
        }
    }

    /// Builds a sequence from digit values, most significant first.
    ///
    /// Leading zeros are dropped (keeping at least one digit).
    ///
    /// # Errors
    ///
    /// - [`BitError::EmptyInput`] if `digits` is empty
    /// - [`BitError::InvalidDigit`] if a digit is not below the radix
    /// - [`BitError::Overflow`] if more than [`MAX_DIGITS`] significant
    ///   digits remain
    pub fn new(digits: &[u8], radix: Radix) -> Result<Self> {
        if digits.is_empty() {
            return Err(BitError::EmptyInput);
        }

        if let Some((position, &digit)) = digits
            .iter()
            .enumerate()
            .find(|&(_, &d)| u32::from(d) >= radix.base())
        {
            return Err(BitError::InvalidDigit {
                digit,
                radix: radix.base(),
                position,
            });
        }

        let first = digits.iter().position(|&d| d != 0).unwrap_or(digits.len() - 1);
        let significant = &digits[first..];

        if significant.len() > MAX_DIGITS {
            return Err(BitError::Overflow {
                radix: radix.base(),
            });
        }

        let mut out = [0u8; MAX_DIGITS];
        out[MAX_DIGITS - significant.len()..].copy_from_slice(significant);

        Ok(Self::from_tail(out, significant.len(), radix))
    }

    /// The digits, most significant first.
    pub fn as_slice(&self) -> &[u8] {
        &self.digits[self.start..]
    }

    /// Number of digits (at least one).
    pub fn len(&self) -> usize {
        MAX_DIGITS - self.start
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Decodes the sequence back to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::Overflow`] if the value does not fit in a `u32`
    /// (possible for 11 or more significant decimal digits).
    pub fn value(&self) -> Result<u32> {
        super::decode(self.as_slice(), self.radix)
    }
}

impl<const N: usize> PartialEq<[u8; N]> for DigitSeq {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<[u8]> for DigitSeq {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl Display for DigitSeq {
    /// Formats the digits as ASCII characters, e.g. `1011`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for &digit in self.as_slice() {
            write!(f, "{digit}")?;
        }

        Ok(())
    }
}

impl Debug for DigitSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DigitSeq")
            .field("digits", &self.as_slice())
            .field("radix", &self.radix.base())
            .finish()
    }
}

/// Parses ASCII digit text into a digit sequence of `radix`.
///
/// Whitespace is not trimmed; a trailing newline is reported as an invalid
/// character like any other.
///
/// # Errors
///
/// - [`BitError::EmptyInput`] for empty text
/// - [`BitError::InvalidCharacter`] for anything other than `0`-`9`
/// - [`BitError::InvalidDigit`] for a decimal digit not valid in `radix`
/// - [`BitError::Overflow`] for more than [`MAX_DIGITS`] significant digits
pub fn parse_digits(text: &str, radix: Radix) -> Result<DigitSeq> {
    let mut values = Vec::with_capacity(text.len());

    for (position, ch) in text.chars().enumerate() {
        let value = ch
            .to_digit(10)
            .ok_or(BitError::InvalidCharacter { ch, position })?;

        values.push(value as u8);
    }

    DigitSeq::new(&values, radix)
}

#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
struct DigitSeqRepr {
    radix: Radix,
    digits: String,
}

#[cfg(feature = "serde")]
impl TryFrom<DigitSeqRepr> for DigitSeq {
    type Error = BitError;

    fn try_from(repr: DigitSeqRepr) -> std::result::Result<Self, Self::Error> {
        parse_digits(&repr.digits, repr.radix)
    }
}

#[cfg(feature = "serde")]
impl From<DigitSeq> for DigitSeqRepr {
    fn from(seq: DigitSeq) -> Self {
        DigitSeqRepr {
            radix: seq.radix,
            digits: seq.to_string(),
        }
    }
}
