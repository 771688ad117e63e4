//! Error type shared by every codec in the crate.
//!
//! All failures are local and deterministic: the same input always
//! reproduces the same error, so nothing here is retryable. Callers decide
//! whether to re-prompt or abort.

use thiserror::Error;

use crate::float32::Field;
use crate::primitives::Width;

/// Broad classification of a [`BitError`].
///
/// Several variants describe the same kind of mistake with different
/// context (an out-of-radix digit value and a non-digit character are both
/// digit errors), so callers that only care about the category match on
/// this instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A digit or character is not valid for its declared radix.
    InvalidDigit,
    /// A width is unsupported or a width transition goes the wrong way.
    InvalidWidth,
    /// A float field does not fit in its allotted bits.
    FieldOutOfRange,
    /// A value does not fit in the requested representation.
    Overflow,
}

/// Errors returned by the radix, two's-complement and float codecs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BitError {
    /// A digit value is greater than or equal to its radix.
    #[error("digit {digit} at position {position} is not valid in radix {radix}")]
    InvalidDigit { digit: u8, radix: u32, position: usize },

    /// A character in digit text is not an ASCII decimal digit.
    #[error("character {ch:?} at position {position} is not a digit")]
    InvalidCharacter { ch: char, position: usize },

    /// Digit text was empty.
    #[error("digit sequence is empty")]
    EmptyInput,

    /// Only radix 2 and radix 10 are supported.
    #[error("unsupported radix {radix}")]
    InvalidRadix { radix: u32 },

    /// Extension asked to narrow, or truncation asked to widen.
    #[error("cannot convert from {from} bits to {to} bits")]
    InvalidWidth { from: u32, to: u32 },

    /// Widths are limited to 8, 16 and 32 bits.
    #[error("unsupported bit width {bits}")]
    UnsupportedWidth { bits: u32 },

    /// A float field exceeds the number of bits allotted to it.
    #[error("{field} value {value:#x} does not fit in {} bits", .field.bits())]
    FieldOutOfRange { field: Field, value: u32 },

    /// A decoded value does not fit in 32 bits.
    #[error("value overflows 32 bits in radix {radix}")]
    Overflow { radix: u32 },

    /// A fixed-width value does not fit in the requested native type.
    #[error("value {value} does not fit in {width}")]
    ValueOutOfRange { value: i64, width: Width },
}

impl BitError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDigit { .. }
            | Self::InvalidCharacter { .. }
            | Self::EmptyInput
            | Self::InvalidRadix { .. } => ErrorKind::InvalidDigit,
            Self::InvalidWidth { .. } | Self::UnsupportedWidth { .. } => ErrorKind::InvalidWidth,
            Self::FieldOutOfRange { .. } => ErrorKind::FieldOutOfRange,
            Self::Overflow { .. } | Self::ValueOutOfRange { .. } => ErrorKind::Overflow,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BitError>;
