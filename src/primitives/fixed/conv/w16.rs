//! Conversions between `FixedInt` and 16-bit native integers.

use crate::error::BitError;
use crate::primitives::{FixedInt, Width};

/// Wraps an `i16` as a 16-bit value with the same bit pattern.
impl From<i16> for FixedInt {
    fn from(value: i16) -> Self {
        FixedInt::from_raw(value as u16 as u32, Width::W16)
    }
}

/// Wraps a `u16` as a 16-bit value.
impl From<u16> for FixedInt {
    fn from(value: u16) -> Self {
        FixedInt::from_raw(u32::from(value), Width::W16)
    }
}

/// Attempts to read a `FixedInt` of any width as an `i16`.
///
/// The signed interpretation is used, so a 16-bit value always succeeds
/// and a wider value succeeds only if it lies in the `i16` range.
impl TryFrom<FixedInt> for i16 {
    type Error = BitError;

    fn try_from(value: FixedInt) -> Result<Self, Self::Error> {
        let signed = value.to_signed();

        i16::try_from(signed).map_err(|_| BitError::ValueOutOfRange {
            value: i64::from(signed),
            width: Width::W16,
        })
    }
}

/// Attempts to read a `FixedInt` of any width as a `u16`.
///
/// The unsigned interpretation is used.
impl TryFrom<FixedInt> for u16 {
    type Error = BitError;

    fn try_from(value: FixedInt) -> Result<Self, Self::Error> {
        let unsigned = value.to_unsigned();

        u16::try_from(unsigned).map_err(|_| BitError::ValueOutOfRange {
            value: i64::from(unsigned),
            width: Width::W16,
        })
    }
}
