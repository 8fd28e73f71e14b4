//! Recurrence forward conversion: keep a running power of b and multiply
//! it by b = −1+i once per digit.
//!
//! Digits 0 and 1 are taken directly; from digit 2 on the loop stops as
//! soon as no higher digit is set, so the cost depends on the position of
//! the highest set digit rather than on the full width.

use crate::converter::ForwardConverter;
use crate::digits::DigitString;
use crate::gaussian::GaussianInt;

/// Evaluate a digit string by iterated multiplication with the radix.
#[must_use]
pub fn to_gaussian(digits: DigitString) -> GaussianInt {
    let bits = digits.bits();
    let digit0 = i128::from(bits & 1 == 1);
    let digit1 = i128::from(bits & 0b10 == 0b10);

    let mut sum = GaussianInt::new(digit0 - digit1, digit1);
    let mut power = GaussianInt::RADIX;

    let mut remaining = bits >> 2;
    while remaining != 0 {
        power = power.mul_radix();
        if remaining & 1 == 1 {
            sum += power;
        }
        remaining >>= 1;
    }

    sum
}

/// Running-power forward converter (variant 2).
pub struct RecurrenceConverter;

impl RecurrenceConverter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RecurrenceConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardConverter for RecurrenceConverter {
    fn to_gaussian(&self, digits: DigitString) -> GaussianInt {
        to_gaussian(digits)
    }

    fn name(&self) -> &str {
        "Recurrence"
    }
}
