//! Native integer conversions
//!
//! Each submodule converts between `FixedInt` and the native signed and
//! unsigned types of one width:
//! - `From<native>` always succeeds and picks the matching `Width`
//! - `TryFrom<FixedInt>` fails if the value does not fit the native type
//!
//! Narrowing never truncates implicitly; use `twos::truncate` for that.

mod w16;
mod w32;
mod w8;
