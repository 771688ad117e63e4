//! Bit-level numeric codecs
//!
//! This crate shows, value by value, how integers and floats are laid out
//! in binary. It provides small, pure codecs that a teaching program can
//! call with already-parsed numbers and whose results it can print.
//!
//! The focus is on **exact, predictable bit patterns**: every value carries
//! its width, every rendering shows every bit, and no operation rounds,
//! normalizes or silently widens.
//!
//! # Module overview
//!
//! - `primitives`
//!   Width-tagged values shared by the codecs: `Width` (8, 16 or 32 bits)
//!   and `FixedInt`, an integer that wraps modulo `2^width` and renders as
//!   exactly `width` binary digits with `{:b}`.
//!
//! - `radix`
//!   Conversion between decimal and binary digit sequences for unsigned
//!   32-bit values. `decode` accumulates digits with Horner's method,
//!   `encode` divides repeatedly and reads the remainders back. The
//!   `trace` submodule reports every intermediate step to a callback and
//!   to `tracing` without touching the pure functions.
//!
//! - `twos`
//!   Two's-complement negation, the complement-only value, sign extension
//!   to a wider width and truncation to a narrower one.
//!
//! - `float32`
//!   Decomposition of an IEEE-754 single-precision pattern into sign,
//!   biased exponent and mantissa, and composition back. The two are exact
//!   inverses; NaN, infinities and subnormals pass through unchanged.
//!
//! - `error`
//!   `BitError`, the single error type, and its coarse `ErrorKind`.
//!
//! # Design goals
//!
//! - No heap allocation in the codecs themselves
//! - Explicit widths everywhere, with wrapping arithmetic
//! - No I/O: callers parse input and print results
//!
//! The components are independent of each other and hold no state, so
//! every function is safe to call from any thread.

pub mod error;
pub mod float32;
pub mod primitives;
pub mod radix;
pub mod twos;

pub use error::{BitError, ErrorKind, Result};
