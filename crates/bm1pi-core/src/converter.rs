//! Converter traits and the conversion error type.
//!
//! `ForwardConverter` maps digit strings to Gaussian integers and is
//! implemented by the scalar, batch and recurrence variants.
//! `InverseConverter` maps Gaussian integers back to digit strings.

use std::fmt;

use crate::digits::DigitString;
use crate::gaussian::GaussianInt;

/// Direction of a conversion, used to report variant errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Digit string → Gaussian integer.
    Forward,
    /// Gaussian integer → digit string.
    Inverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Inverse => f.write_str("inverse"),
        }
    }
}

/// Error type for conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// No implementation exists for the requested variant.
    #[error("unknown {direction} variant: {variant}")]
    InvalidVariant {
        /// Conversion direction the variant was requested for.
        direction: Direction,
        /// The requested variant index.
        variant: usize,
    },

    /// The canonical expansion needs more than 128 digits.
    #[error("{value} has no base (-1+i) expansion within 128 digits")]
    RepresentationOverflow {
        /// The value that was being converted.
        value: GaussianInt,
    },

    /// Results from different variants don't match.
    #[error("result mismatch between variants")]
    Mismatch,
}

/// Digit string → Gaussian integer. Total over every 128-bit input.
pub trait ForwardConverter: Send + Sync {
    /// Evaluate the digit string at b = −1+i.
    fn to_gaussian(&self, digits: DigitString) -> GaussianInt;

    /// Get the name of this variant.
    fn name(&self) -> &str;
}

/// Gaussian integer → canonical digit string.
pub trait InverseConverter: Send + Sync {
    /// Extract the canonical digit string of `value`.
    fn to_digits(&self, value: GaussianInt) -> Result<DigitString, ConversionError>;

    /// Get the name of this variant.
    fn name(&self) -> &str;
}
