//! Radix conversion between decimal and binary.
//!
//! The module is split in three layers:
//!
//! - [`digits`]  
//!   The `Radix` and `DigitSeq` value types, plus parsing of ASCII digit
//!   text into a digit sequence.
//!
//! - [`core`]  
//!   The pure codec: `decode` (Horner accumulation, most significant digit
//!   first) and `encode` (repeated division, remainders read back in
//!   reverse). Also exposes the intermediate steps as iterators so that
//!   callers can show the working without the codec printing anything.
//!
//! - [`trace`]  
//!   Instrumented wrappers that report every intermediate step to a
//!   callback and to `tracing`.
//!
//! Values are limited to 32 bits; decoding a longer number fails with
//! `Overflow` rather than wrapping.

pub mod core;
pub mod digits;
pub mod trace;

pub use self::core::{Division, Divisions, Weighting, Weights, decode, divisions, encode, weights};
pub use self::digits::{DigitSeq, MAX_DIGITS, Radix, parse_digits};
