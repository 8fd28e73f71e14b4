//! Scalar forward conversion: linear accumulation over 8-digit groups.
//!
//! Group `g` is scaled by 16^g; inside a group every set digit adds its
//! [`BitWeight`](crate::table::BitWeight) times that scale. All 128 digits
//! are always visited.

use crate::constants::{GROUP_COUNT, GROUP_SCALE_SHIFT};
use crate::converter::ForwardConverter;
use crate::digits::DigitString;
use crate::gaussian::GaussianInt;
use crate::table::WEIGHTS;

/// Evaluate a digit string by scanning every group.
#[must_use]
pub fn to_gaussian(digits: DigitString) -> GaussianInt {
    let mut real: i128 = 0;
    let mut imag: i128 = 0;

    for g in 0..GROUP_COUNT {
        let group = digits.group(g);
        let shift = g * GROUP_SCALE_SHIFT;
        for (j, weight) in WEIGHTS.iter().enumerate() {
            if (group >> j) & 1 == 1 {
                let power = i128::from(weight.power) << shift;
                real += i128::from(weight.real_sign) * power;
                imag += i128::from(weight.imag_sign) * power;
            }
        }
    }

    GaussianInt::new(real, imag)
}

/// Default forward converter (variant 0).
pub struct ScalarConverter;

impl ScalarConverter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScalarConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardConverter for ScalarConverter {
    fn to_gaussian(&self, digits: DigitString) -> GaussianInt {
        to_gaussian(digits)
    }

    fn name(&self) -> &str {
        "Scalar"
    }
}
