//! Width-tagged integer primitive
//!
//! This module defines `FixedInt`, an integer that carries its bit width
//! alongside its bit pattern.
//!
//! `FixedInt` is a plain value type. It stores the raw pattern in a `u32`,
//! masked to the declared width, and interprets it as signed (two's
//! complement) or unsigned on demand. Typical uses:
//! - demonstrating negation and sign extension at a chosen width
//! - rendering a value as exactly `width` binary digits
//! - wrapping arithmetic that never promotes to a wider type
//!
//! The submodules split the type the same way throughout:
//! - `core`: representation, accessors and formatting
//! - `ops`: bitwise complement and wrapping arithmetic
//! - `conv`: conversions to and from native integers, one file per width

mod conv;
mod core;
mod ops;

pub use self::core::FixedInt;
