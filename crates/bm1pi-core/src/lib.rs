//! # bm1pi-core
//!
//! Core library for converting between Gaussian integers and their digit
//! strings in base b = −1+i with digits {0, 1}, bounded to 128 digits.
//! Implements three forward variants (scalar, batch, recurrence) and the
//! parity-based inverse.

pub mod batch;
pub mod constants;
pub mod converter;
pub mod digits;
pub mod gaussian;
pub mod inverse;
pub mod parse;
pub mod recurrence;
pub mod registry;
pub mod scalar;
#[cfg(target_arch = "x86_64")]
pub(crate) mod simd;
pub mod table;

// Re-exports
pub use constants::{
    exit_codes, BATCH_VARIANT, MAX_DIGITS, PARITY_VARIANT, RECURRENCE_VARIANT, SCALAR_VARIANT,
};
pub use converter::{ConversionError, Direction, ForwardConverter, InverseConverter};
pub use digits::DigitString;
pub use gaussian::GaussianInt;
pub use parse::{parse_input, Input, ParseError};
pub use registry::{ConverterFactory, DefaultFactory};

/// Evaluate a digit string with the default (scalar) variant.
///
/// For variant selection use the [`ConverterFactory`].
///
/// # Example
/// ```
/// use bm1pi_core::{DigitString, GaussianInt};
///
/// assert_eq!(bm1pi_core::to_gaussian(DigitString::new(0b1100)), GaussianInt::new(2, 0));
/// assert_eq!(bm1pi_core::to_gaussian(DigitString::new(0b11)), GaussianInt::new(0, 1));
/// ```
#[must_use]
pub fn to_gaussian(digits: DigitString) -> GaussianInt {
    scalar::to_gaussian(digits)
}

/// Find the canonical digit string of a Gaussian integer.
///
/// # Example
/// ```
/// use bm1pi_core::GaussianInt;
///
/// let digits = bm1pi_core::to_digits(GaussianInt::new(-1, 0)).unwrap();
/// assert_eq!(digits.to_string(), "11101");
/// assert_eq!(digits.bit_len(), 5);
/// ```
pub fn to_digits(value: GaussianInt) -> Result<DigitString, ConversionError> {
    inverse::to_digits(value)
}
