use crate::error::{BitError, Result};
use crate::primitives::{FixedInt, Width};

/// Returns the two's-complement negation of `value` at its own width.
///
/// Computed as `!value + 1` modulo `2^width`, so `value + negate(value)`
/// is zero. The most negative value is its own negation (`-128` at 8 bits).
pub fn negate(value: FixedInt) -> FixedInt {
    complement(value).successor()
}

/// Returns the bitwise complement of `value` at its own width.
///
/// `value + complement(value)` is all ones, i.e. `-1`. Adding one more
/// gives the negation.
pub fn complement(value: FixedInt) -> FixedInt {
    !value
}

/// Widens `value` to `to`, copying its sign bit into every new high bit.
///
/// Extending to the same width returns `value` unchanged.
///
/// # Errors
///
/// Returns [`BitError::InvalidWidth`] if `to` is narrower than the width of
/// `value`; use [`truncate`] to narrow.
pub fn sign_extend(value: FixedInt, to: Width) -> Result<FixedInt> {
    let from = value.width();

    if to < from {
        return Err(BitError::InvalidWidth {
            from: from.bits(),
            to: to.bits(),
        });
    }

    let bits = if value.sign_bit() {
        value.raw() | (to.mask() & !from.mask())
    } else {
        value.raw()
    };

    Ok(FixedInt::from_raw(bits, to))
}

/// Sign-extends a raw `from`-bit pattern to `to` bits.
///
/// Bits of `raw` above `from` are ignored.
///
/// # Errors
///
/// - [`BitError::UnsupportedWidth`] if either width is not 8, 16 or 32
/// - [`BitError::InvalidWidth`] if `to` is narrower than `from`
pub fn sign_extend_bits(raw: u32, from: u32, to: u32) -> Result<FixedInt> {
    let from = Width::try_from(from)?;
    let to = Width::try_from(to)?;

    sign_extend(FixedInt::from_raw(raw, from), to)
}

/// Narrows `value` to `to`, keeping its low-order bits.
///
/// The top bit of the kept pattern becomes the new sign bit, so values
/// outside the narrower range change sign or magnitude (300 at 16 bits
/// truncates to 44 at 8 bits, 200 truncates to -56).
///
/// # Errors
///
/// Returns [`BitError::InvalidWidth`] if `to` is wider than the width of
/// `value`; use [`sign_extend`] to widen.
pub fn truncate(value: FixedInt, to: Width) -> Result<FixedInt> {
    let from = value.width();

    if to > from {
        return Err(BitError::InvalidWidth {
            from: from.bits(),
            to: to.bits(),
        });
    }

    Ok(FixedInt::from_raw(value.raw(), to))
}
