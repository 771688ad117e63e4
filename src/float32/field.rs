//! Field layout of a single-precision pattern.

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three fields of a single-precision pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Sign,
    Exponent,
    Mantissa,
}

impl Field {
    /// Number of bits allotted to the field.
    pub const fn bits(self) -> u32 {
        match self {
            Field::Sign => 1,
            Field::Exponent => 8,
            Field::Mantissa => 23,
        }
    }

    /// Position of the field's least significant bit in the pattern.
    pub const fn shift(self) -> u32 {
        match self {
            Field::Sign => 31,
            Field::Exponent => 23,
            Field::Mantissa => 0,
        }
    }

    /// Largest value the field can hold (unshifted).
    pub const fn max(self) -> u32 {
        (1 << self.bits()) - 1
    }

    /// Mask selecting the field within the 32-bit pattern.
    pub const fn mask(self) -> u32 {
        self.max() << self.shift()
    }

    /// Extracts the field from a pattern.
    pub const fn extract(self, bits: u32) -> u32 {
        (bits & self.mask()) >> self.shift()
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            Field::Sign => "sign",
            Field::Exponent => "exponent",
            Field::Mantissa => "mantissa",
        })
    }
}
