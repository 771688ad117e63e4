//! Two's-complement operations on width-tagged integers.
//!
//! All functions take and return [`FixedInt`](crate::primitives::FixedInt)
//! values, so the width travels with the value and every result is already
//! reduced modulo `2^width`.
//!
//! - `negate`: complement plus one, the arithmetic negation
//! - `complement`: complement only, which is *not* the negation
//! - `sign_extend`: widen, replicating the sign bit
//! - `truncate`: narrow, keeping the low bits
//!
//! Widening and narrowing are separate operations and reject a target
//! width going the wrong way.

mod core;

pub use self::core::{complement, negate, sign_extend, sign_extend_bits, truncate};
