//! Bitwise and arithmetic operations for `FixedInt`
//!
//! Only the operations the codecs need are provided. Every result is
//! masked back to the operand width, and binary operations refuse to mix
//! widths instead of promoting.

use std::ops::Not;

use crate::error::{BitError, Result};
use crate::primitives::{FixedInt, Width};

/// Bitwise complement within the declared width.
///
/// This is the "complement only" value: `a + !a` is all ones (`-1`), not
/// zero.
impl Not for FixedInt {
    type Output = FixedInt;

    fn not(self) -> Self::Output {
        FixedInt::from_raw(!self.bits, self.width)
    }
}

impl FixedInt {
    /// Adds `rhs` modulo `2^width`.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidWidth`] if the operands have different
    /// widths.
    pub fn wrapping_add(self, rhs: FixedInt) -> Result<FixedInt> {
        let width = self.common_width(rhs)?;

        Ok(FixedInt::from_raw(self.bits.wrapping_add(rhs.bits), width))
    }

    /// Subtracts `rhs` modulo `2^width`.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidWidth`] if the operands have different
    /// widths.
    pub fn wrapping_sub(self, rhs: FixedInt) -> Result<FixedInt> {
        let width = self.common_width(rhs)?;

        Ok(FixedInt::from_raw(self.bits.wrapping_sub(rhs.bits), width))
    }

    /// The next value modulo `2^width`.
    ///
    /// Stepping past the largest signed value wraps to the smallest, e.g.
    /// `127 -> -128` at 8 bits.
    pub const fn successor(self) -> FixedInt {
        FixedInt::from_raw(self.bits.wrapping_add(1), self.width)
    }

    fn common_width(self, rhs: FixedInt) -> Result<Width> {
        if self.width != rhs.width {
            return Err(BitError::InvalidWidth {
                from: self.width.bits(),
                to: rhs.width.bits(),
            });
        }

        Ok(self.width)
    }
}
