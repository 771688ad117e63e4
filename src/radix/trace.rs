//! Step-by-step radix conversion.
//!
//! Wraps the pure codec so that every intermediate step can be shown, the
//! way a worked example on paper would:
//!
//! ```text
//! 13 / 2 = 6, remainder = 1
//! 6 / 2 = 3, remainder = 0
//! ...
//! weight 1 x digit 1 = 1
//! weight 2 x digit 1 = 2
//! ```
//!
//! Each step is passed to the caller's callback and also emitted as a
//! `tracing` event at `TRACE` level. The returned values are identical to
//! [`encode`](super::encode) and [`decode`](super::decode).

use tracing::trace;

use crate::error::Result;
use crate::radix::core::{Division, Weighting, decode, encode_inspect, weights};
use crate::radix::digits::{DigitSeq, Radix};

/// Encodes `n`, reporting each division step (least significant remainder
/// first).
pub fn encode_with<F>(n: u32, radix: Radix, mut on_step: F) -> DigitSeq
where
    F: FnMut(&Division),
{
    let digits = encode_inspect(n, radix, |step| {
        trace!(
            radix = radix.base(),
            dividend = step.dividend,
            quotient = step.quotient,
            remainder = step.remainder,
            "division step"
        );
        on_step(step);
    });

    trace!(value = n, %digits, "encoded");

    digits
}

/// Decodes `digits`, reporting each digit-weight term (least significant
/// digit first).
///
/// Steps are reported only once the sequence is known to be valid, so a
/// failing call reports nothing.
///
/// # Errors
///
/// Same as [`decode`](super::decode).
pub fn decode_with<F>(digits: &[u8], radix: Radix, mut on_step: F) -> Result<u32>
where
    F: FnMut(&Weighting),
{
    let value = decode(digits, radix)?;

    for term in weights(digits, radix) {
        trace!(
            radix = radix.base(),
            weight = term.weight,
            digit = term.digit,
            product = term.product,
            "weight term"
        );
        on_step(&term);
    }

    trace!(value, "decoded");

    Ok(value)
}

/// Collects the division steps of [`encode_with`] alongside the result.
pub fn encode_steps(n: u32, radix: Radix) -> (DigitSeq, Vec<Division>) {
    let mut steps = Vec::new();
    let digits = encode_with(n, radix, |step| steps.push(*step));

    (digits, steps)
}

/// Collects the weight terms of [`decode_with`] alongside the result.
///
/// # Errors
///
/// Same as [`decode`](super::decode).
pub fn decode_steps(digits: &[u8], radix: Radix) -> Result<(u32, Vec<Weighting>)> {
    let mut steps = Vec::with_capacity(digits.len());
    let value = decode_with(digits, radix, |term| steps.push(*term))?;

    Ok((value, steps))
}
