//! Decomposition and composition of single-precision patterns.

use std::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BitError, Result};
use crate::float32::Field;

/// Bias added to the true exponent when it is stored.
pub const EXPONENT_BIAS: i16 = 127;

/// The three fields of a single-precision pattern.
///
/// Every field is guaranteed to fit its width, so converting back to a
/// pattern is infallible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FieldsRepr", into = "FieldsRepr"))]
pub struct Float32Fields {
    sign: u8,
    exponent: u8,
    mantissa: u32,
}

impl Float32Fields {
    /// Builds fields from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::FieldOutOfRange`] for the first field (sign,
    /// exponent, mantissa) that does not fit its bit width.
    pub fn new(sign: u32, exponent_field: u32, mantissa: u32) -> Result<Self> {
        let sign = checked(Field::Sign, sign)?;
        let exponent = checked(Field::Exponent, exponent_field)?;
        let mantissa = checked(Field::Mantissa, mantissa)?;

        Ok(Self {
            sign: sign as u8,
            exponent: exponent as u8,
            mantissa,
        })
    }

    /// Splits a 32-bit pattern into its fields.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            sign: Field::Sign.extract(bits) as u8,
            exponent: Field::Exponent.extract(bits) as u8,
            mantissa: Field::Mantissa.extract(bits),
        }
    }

    /// Reassembles the 32-bit pattern.
    pub const fn to_bits(self) -> u32 {
        ((self.sign as u32) << Field::Sign.shift())
            | ((self.exponent as u32) << Field::Exponent.shift())
            | self.mantissa
    }

    /// Splits the bit pattern of an `f32`.
    pub fn from_f32(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Reinterprets the fields as an `f32`.
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.to_bits())
    }

    /// The sign bit, 0 or 1.
    pub const fn sign(&self) -> u8 {
        self.sign
    }

    pub const fn is_negative(&self) -> bool {
        self.sign == 1
    }

    /// The stored (biased) exponent, 0 through 255.
    pub const fn exponent_field(&self) -> u8 {
        self.exponent
    }

    /// The exponent with the bias removed, -127 through 128.
    ///
    /// No special meaning is given to the reserved fields 0 and 255.
    pub const fn exponent(&self) -> i16 {
        self.exponent as i16 - EXPONENT_BIAS
    }

    /// The raw 23-bit mantissa, without the implicit leading 1.
    pub const fn mantissa(&self) -> u32 {
        self.mantissa
    }
}

fn checked(field: Field, value: u32) -> Result<u32> {
    if value > field.max() {
        return Err(BitError::FieldOutOfRange { field, value });
    }

    Ok(value)
}

impl From<u32> for Float32Fields {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Float32Fields> for u32 {
    fn from(fields: Float32Fields) -> Self {
        fields.to_bits()
    }
}

impl From<f32> for Float32Fields {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl Display for Float32Fields {
    /// Formats the pattern as `s-eeeeeeee-mmmmmmmmmmmmmmmmmmmmmmm`.
    ///
    /// Example: `1.0` renders as `0-01111111-00000000000000000000000`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{:01b}-{:08b}-{:023b}",
            self.sign, self.exponent, self.mantissa
        )
    }
}

/// Splits a 32-bit pattern into sign, biased exponent and mantissa.
pub fn decompose(bits: u32) -> Float32Fields {
    Float32Fields::from_bits(bits)
}

/// Builds a 32-bit pattern as `sign << 31 | exponent_field << 23 | mantissa`.
///
/// Any in-range combination is accepted, including the patterns of NaN
/// and the infinities.
///
/// # Errors
///
/// Returns [`BitError::FieldOutOfRange`] if a field exceeds its width.
pub fn compose(sign: u32, exponent_field: u32, mantissa: u32) -> Result<u32> {
    Float32Fields::new(sign, exponent_field, mantissa).map(Float32Fields::to_bits)
}

#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
struct FieldsRepr {
    sign: u32,
    exponent: u32,
    mantissa: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<FieldsRepr> for Float32Fields {
    type Error = BitError;

    fn try_from(repr: FieldsRepr) -> std::result::Result<Self, Self::Error> {
        Float32Fields::new(repr.sign, repr.exponent, repr.mantissa)
    }
}

#[cfg(feature = "serde")]
impl From<Float32Fields> for FieldsRepr {
    fn from(fields: Float32Fields) -> Self {
        FieldsRepr {
            sign: u32::from(fields.sign),
            exponent: u32::from(fields.exponent),
            mantissa: fields.mantissa,
        }
    }
}
