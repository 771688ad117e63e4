//! Conversions between `FixedInt` and 8-bit native integers.

use crate::error::BitError;
use crate::primitives::{FixedInt, Width};

/// Wraps an `i8` as an 8-bit value with the same bit pattern.
impl From<i8> for FixedInt {
    fn from(value: i8) -> Self {
        FixedInt::from_raw(value as u8 as u32, Width::W8)
    }
}

/// Wraps a `u8` as an 8-bit value.
impl From<u8> for FixedInt {
    fn from(value: u8) -> Self {
        FixedInt::from_raw(u32::from(value), Width::W8)
    }
}

/// Attempts to read a `FixedInt` of any width as an `i8`.
///
/// The signed interpretation is used, so a 8-bit value always succeeds
/// and a wider value succeeds only if it lies in the `i8` range.
impl TryFrom<FixedInt> for i8 {
    type Error = BitError;

    fn try_from(value: FixedInt) -> Result<Self, Self::Error> {
        let signed = value.to_signed();

        i8::try_from(signed).map_err(|_| BitError::ValueOutOfRange {
            value: i64::from(signed),
            width: Width::W8,
        })
    }
}

/// Attempts to read a `FixedInt` of any width as a `u8`.
///
/// The unsigned interpretation is used.
impl TryFrom<FixedInt> for u8 {
    type Error = BitError;

    fn try_from(value: FixedInt) -> Result<Self, Self::Error> {
        let unsigned = value.to_unsigned();

        u8::try_from(unsigned).map_err(|_| BitError::ValueOutOfRange {
            value: i64::from(unsigned),
            width: Width::W8,
        })
    }
}
