//! Inverse conversion: Gaussian integer → canonical digit string.
//!
//! Since norm(b) = 2, z is divisible by b exactly when its real and
//! imaginary parts have the same parity. Each step therefore takes the
//! digit d = parity(real ⊕ imag), subtracts it and divides by b:
//!
//!   (z − d) / b = ((imag − real + d) / 2) + ((−real − imag + d) / 2)i
//!
//! Both numerators are even, so the halving is an exact arithmetic shift.

use tracing::debug;

use crate::constants::MAX_DIGITS;
use crate::converter::{ConversionError, InverseConverter};
use crate::digits::DigitString;
use crate::gaussian::GaussianInt;

/// One extraction step: returns the digit and the quotient (z − d) / b,
/// or `None` if the quotient's numerators leave the `i128` range.
fn divide_by_radix(value: GaussianInt) -> Option<(u128, GaussianInt)> {
    let GaussianInt { real, imag } = value;
    let digit = (real ^ imag) & 1;

    let real_num = imag.checked_sub(real)?.checked_add(digit)?;
    let imag_num = digit.checked_sub(real)?.checked_sub(imag)?;

    Some((
        u128::from(digit == 1),
        GaussianInt::new(real_num >> 1, imag_num >> 1),
    ))
}

/// Extract the canonical digit string of `value`.
///
/// Fails with [`ConversionError::RepresentationOverflow`] when the
/// expansion needs more than 128 digits; digits are never dropped.
pub fn to_digits(value: GaussianInt) -> Result<DigitString, ConversionError> {
    let overflow = || {
        debug!(%value, "value exceeds {MAX_DIGITS} base (-1+i) digits");
        ConversionError::RepresentationOverflow { value }
    };

    let mut digits: u128 = 0;
    let mut rest = value;
    let mut position = 0;
    while position < MAX_DIGITS && !rest.is_zero() {
        let (digit, quotient) = divide_by_radix(rest).ok_or_else(overflow)?;
        digits |= digit << position;
        rest = quotient;
        position += 1;
    }

    if !rest.is_zero() {
        return Err(overflow());
    }
    Ok(DigitString::new(digits))
}

/// Parity-extraction inverse converter (variant 0).
pub struct ParityInverse;

impl ParityInverse {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParityInverse {
    fn default() -> Self {
        Self::new()
    }
}

impl InverseConverter for ParityInverse {
    fn to_digits(&self, value: GaussianInt) -> Result<DigitString, ConversionError> {
        to_digits(value)
    }

    fn name(&self) -> &str {
        "ParityExtraction"
    }
}
