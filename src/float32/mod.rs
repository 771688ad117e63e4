//! IEEE-754 single-precision field codec
//!
//! This module maps a 32-bit floating-point bit pattern to its three
//! fields and back:
//!
//! ```text
//!  31  30      23 22                    0
//! +---+----------+-----------------------+
//! | s | exponent |       mantissa        |
//! +---+----------+-----------------------+
//! ```
//!
//! - sign: 1 bit
//! - exponent: 8 bits, stored with a bias of 127
//! - mantissa: 23 bits, stored without the implicit leading 1
//!
//! The codec works on representation only. NaN, infinities and subnormals
//! pass through as their bit patterns; nothing is classified, rounded or
//! normalized, so decomposition and composition are exact inverses.

mod core;
mod field;

pub use self::core::{EXPONENT_BIAS, Float32Fields, compose, decompose};
pub use self::field::Field;
