//! Primitive types
//!
//! This module defines the fixed-width value types shared by the codecs.
//!
//! Primitives are small, `Copy`, allocation-free building blocks with
//! explicit widths. Native Rust integers already have fixed widths, but the
//! codecs need the width as a runtime value: a negation at 8 bits and the
//! same negation at 32 bits produce different bit patterns, and the binary
//! rendering of a value must always show exactly its declared width.
//!
//! Current primitives include:
//! - `Width`: one of the supported bit widths (8, 16, 32)
//! - `FixedInt`: an integer tagged with its `Width`, wrapping modulo `2^width`

mod fixed;
mod width;

pub use fixed::FixedInt;
pub use width::Width;
