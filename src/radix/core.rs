//! Pure radix codec.
//!
//! `decode` and `encode` never log or print. The step iterators
//! ([`divisions`], [`weights`]) expose the same arithmetic one step at a
//! time for callers that want to show the working.

use std::iter::{FusedIterator, Rev};
use std::slice::Iter;

use crate::error::{BitError, Result};
use crate::radix::digits::{DigitSeq, MAX_DIGITS, Radix};

/// One step of repeated division: `dividend = quotient * radix + remainder`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Division {
    pub dividend: u32,
    pub quotient: u32,
    pub remainder: u32,
}

/// Iterator over the division steps of [`encode`].
///
/// Yields at least one step, so zero produces the single remainder `0`.
#[derive(Clone, Debug)]
pub struct Divisions {
    next: Option<u32>,
    base: u32,
}

impl Iterator for Divisions {
    type Item = Division;

    fn next(&mut self) -> Option<Division> {
        let dividend = self.next?;
        let quotient = dividend / self.base;
        let remainder = dividend % self.base;

        self.next = (quotient != 0).then_some(quotient);

        Some(Division {
            dividend,
            quotient,
            remainder,
        })
    }
}

impl FusedIterator for Divisions {}

/// Returns the division steps that convert `n` to `radix`, least
/// significant remainder first.
pub fn divisions(n: u32, radix: Radix) -> Divisions {
    Divisions {
        next: Some(n),
        base: radix.base(),
    }
}

/// One digit-weight term of a positional value: `product = weight * digit`.
///
/// Weights are computed in 64 bits and saturate, so leading zeros of an
/// arbitrarily long sequence never overflow. For any sequence that decodes
/// successfully every non-zero term is exact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Weighting {
    pub weight: u64,
    pub digit: u8,
    pub product: u64,
}

/// Iterator over the digit-weight terms of a sequence, least significant
/// digit first.
#[derive(Clone, Debug)]
pub struct Weights<'a> {
    digits: Rev<Iter<'a, u8>>,
    weight: u64,
    base: u64,
}

impl Iterator for Weights<'_> {
    type Item = Weighting;

    fn next(&mut self) -> Option<Weighting> {
        let digit = *self.digits.next()?;
        let weight = self.weight;

        self.weight = weight.saturating_mul(self.base);

        Some(Weighting {
            weight,
            digit,
            product: weight.saturating_mul(u64::from(digit)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.digits.size_hint()
    }
}

impl ExactSizeIterator for Weights<'_> {}

/// Returns the digit-weight terms of `digits` (most significant first) in
/// `radix`, starting from the least significant digit with weight 1.
///
/// Digits are not validated here; see [`decode`].
pub fn weights(digits: &[u8], radix: Radix) -> Weights<'_> {
    Weights {
        digits: digits.iter().rev(),
        weight: 1,
        base: u64::from(radix.base()),
    }
}

/// Decodes digits (most significant first) in `radix` to an integer.
///
/// Uses Horner's method: `sum = sum * radix + digit` for each digit. An
/// empty slice decodes to zero.
///
/// # Errors
///
/// - [`BitError::InvalidDigit`] if a digit is not below the radix
/// - [`BitError::Overflow`] if the value does not fit in a `u32`
pub fn decode(digits: &[u8], radix: Radix) -> Result<u32> {
    let base = radix.base();

    digits
        .iter()
        .enumerate()
        .try_fold(0u32, |sum, (position, &digit)| {
            if u32::from(digit) >= base {
                return Err(BitError::InvalidDigit {
                    digit,
                    radix: base,
                    position,
                });
            }

            sum.checked_mul(base)
                .and_then(|s| s.checked_add(u32::from(digit)))
                .ok_or(BitError::Overflow { radix: base })
        })
}

/// Encodes `n` as digits of `radix`, most significant first.
///
/// `encode(0, radix)` is the single digit `0`.
pub fn encode(n: u32, radix: Radix) -> DigitSeq {
    encode_inspect(n, radix, |_| {})
}

/// [`encode`] with a hook called for every division step, in order.
pub(crate) fn encode_inspect<F>(n: u32, radix: Radix, mut inspect: F) -> DigitSeq
where
    F: FnMut(&Division),
{
    let mut digits = [0u8; MAX_DIGITS];
    let mut used = 0;

    // Remainders arrive least significant first, so fill from the back.
    for (slot, step) in digits.iter_mut().rev().zip(divisions(n, radix)) {
        inspect(&step);
        *slot = step.remainder as u8;
        used += 1;
    }

    DigitSeq::from_tail(digits, used, radix)
}
