//! Conversions between `FixedInt` and 32-bit native integers.
//!
//! Every supported width fits in 32 bits, so reading a `FixedInt` back as
//! `i32` or `u32` is infallible.

use crate::primitives::{FixedInt, Width};

impl From<i32> for FixedInt {
    fn from(value: i32) -> Self {
        FixedInt::from_raw(value as u32, Width::W32)
    }
}

impl From<u32> for FixedInt {
    fn from(value: u32) -> Self {
        FixedInt::from_raw(value, Width::W32)
    }
}

/// Sign-extends the value to `i32`.
impl From<FixedInt> for i32 {
    fn from(value: FixedInt) -> Self {
        value.to_signed()
    }
}

/// Zero-extends the value to `u32`.
impl From<FixedInt> for u32 {
    fn from(value: FixedInt) -> Self {
        value.to_unsigned()
    }
}
