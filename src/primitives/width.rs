//! Supported integer widths.

use std::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BitError;

/// Bit width of a fixed-width integer.
///
/// Variants are ordered from narrowest to widest, so `Width::W8 < Width::W32`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Width {
    W8,
    W16,
    W32,
}

impl Width {
    /// Every supported width, narrowest first.
    pub const ALL: [Width; 3] = [Width::W8, Width::W16, Width::W32];

    /// Number of bits.
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
        }
    }

    /// Mask selecting the low `bits()` bits of a `u32`.
    pub const fn mask(self) -> u32 {
        match self {
            Width::W8 => 0xFF,
            Width::W16 => 0xFFFF,
            Width::W32 => u32::MAX,
        }
    }

    /// Mask selecting the sign bit (the most significant bit of the width).
    pub const fn sign_mask(self) -> u32 {
        1 << (self.bits() - 1)
    }

    /// Smallest signed value representable at this width.
    pub const fn min_signed(self) -> i32 {
        match self {
            Width::W8 => i8::MIN as i32,
            Width::W16 => i16::MIN as i32,
            Width::W32 => i32::MIN,
        }
    }

    /// Largest signed value representable at this width.
    pub const fn max_signed(self) -> i32 {
        match self {
            Width::W8 => i8::MAX as i32,
            Width::W16 => i16::MAX as i32,
            Width::W32 => i32::MAX,
        }
    }
}

/// Attempts to interpret a bit count as a supported width.
impl TryFrom<u32> for Width {
    type Error = BitError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            _ => Err(BitError::UnsupportedWidth { bits }),
        }
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.bits()
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} bits", self.bits())
    }
}
