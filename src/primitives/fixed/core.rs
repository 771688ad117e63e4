//! Width-tagged integer representation
//!
//! The bit pattern is always kept masked to the width, so two values with
//! the same width and the same low bits compare equal regardless of how
//! they were constructed.

use std::fmt::{Binary, Debug, Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::primitives::Width;

/// Integer of an explicit bit width.
///
/// All arithmetic on a `FixedInt` wraps modulo `2^width`. Operations that
/// combine two values require both to have the same width.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FixedIntRepr", into = "FixedIntRepr"))]
pub struct FixedInt {
    pub(crate) bits: u32,
    pub(crate) width: Width,
}

impl FixedInt {
    /// Builds a value from a raw bit pattern, keeping only the low
    /// `width` bits.
    pub const fn from_raw(bits: u32, width: Width) -> Self {
        Self {
            bits: bits & width.mask(),
            width,
        }
    }

    /// Builds a value from a signed integer, wrapping it modulo `2^width`.
    ///
    /// This mirrors assigning an `int` to a narrower C type: only the low
    /// `width` bits survive.
    pub const fn wrapping_new(value: i64, width: Width) -> Self {
        Self::from_raw(value as u32, width)
    }

    /// The value zero at `width`.
    pub const fn zero(width: Width) -> Self {
        Self::from_raw(0, width)
    }

    /// The most negative signed value at `width` (only the sign bit set).
    pub const fn min(width: Width) -> Self {
        Self::from_raw(width.sign_mask(), width)
    }

    /// The most positive signed value at `width`.
    pub const fn max(width: Width) -> Self {
        Self::from_raw(width.mask() >> 1, width)
    }

    /// The declared width.
    pub const fn width(&self) -> Width {
        self.width
    }

    /// The raw bit pattern, zero-extended to 32 bits.
    pub const fn raw(&self) -> u32 {
        self.bits
    }

    /// The pattern interpreted as an unsigned integer.
    pub const fn to_unsigned(&self) -> u32 {
        self.bits
    }

    /// The pattern interpreted as a two's-complement signed integer.
    pub const fn to_signed(&self) -> i32 {
        match self.width {
            Width::W8 => self.bits as u8 as i8 as i32,
            Width::W16 => self.bits as u16 as i16 as i32,
            Width::W32 => self.bits as i32,
        }
    }

    /// Whether the most significant bit of the width is set.
    pub const fn sign_bit(&self) -> bool {
        self.bits & self.width.sign_mask() != 0
    }

    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }
}

impl Display for FixedInt {
    /// Formats the signed decimal value.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.to_signed(), f)
    }
}

impl Binary for FixedInt {
    /// Formats exactly `width` binary digits, most significant first,
    /// sign bit included.
    ///
    /// Example: `-123` at 8 bits renders as `10000101`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0b")?;
        }

        for shift in (0..self.width.bits()).rev() {
            let bit = (self.bits >> shift) & 1;
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }

        Ok(())
    }
}

impl Debug for FixedInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "FixedInt({}, {:b} @ {})", self.to_signed(), self, self.width)
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
struct FixedIntRepr {
    bits: u32,
    width: Width,
}

#[cfg(feature = "serde")]
impl From<FixedIntRepr> for FixedInt {
    fn from(repr: FixedIntRepr) -> Self {
        FixedInt::from_raw(repr.bits, repr.width)
    }
}

#[cfg(feature = "serde")]
impl From<FixedInt> for FixedIntRepr {
    fn from(value: FixedInt) -> Self {
        FixedIntRepr {
            bits: value.bits,
            width: value.width,
        }
    }
}
