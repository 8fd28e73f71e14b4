//! Digit strings in base (−1+i).

use std::fmt;
use std::str::FromStr;

use crate::constants::{GROUP_BITS, MAX_DIGITS};
use crate::parse::{parse_digit_string, ParseError};

/// An unsigned 128-bit digit string: bit `k` is the coefficient of b^k.
///
/// Every bit pattern is a valid digit string. The width carries no
/// information about the significant length; use [`bit_len`](Self::bit_len).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct DigitString(u128);

impl DigitString {
    /// The empty digit string, representing zero.
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(bits: u128) -> Self {
        Self(bits)
    }

    /// The raw bit vector.
    #[must_use]
    pub const fn bits(self) -> u128 {
        self.0
    }

    /// Whether the coefficient of b^k is 1.
    #[must_use]
    pub const fn bit(self, k: u32) -> bool {
        k < MAX_DIGITS && (self.0 >> k) & 1 == 1
    }

    /// Return a copy with the coefficient of b^k set; positions at or
    /// beyond [`MAX_DIGITS`] leave the string unchanged.
    #[must_use]
    pub const fn with_bit(self, k: u32) -> Self {
        if k < MAX_DIGITS {
            Self(self.0 | (1u128 << k))
        } else {
            self
        }
    }

    /// Position of the highest set digit plus one; 0 for the empty string.
    #[must_use]
    pub const fn bit_len(self) -> u32 {
        MAX_DIGITS - self.0.leading_zeros()
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The 8-digit group starting at digit `8 * g`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn group(self, g: u32) -> u8 {
        (self.0 >> (g * GROUP_BITS)) as u8
    }
}

impl From<u128> for DigitString {
    fn from(bits: u128) -> Self {
        Self(bits)
    }
}

impl From<DigitString> for u128 {
    fn from(digits: DigitString) -> Self {
        digits.0
    }
}

/// Minimal-width binary form, most significant digit first (`"0"` for zero).
impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Binary for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl FromStr for DigitString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digit_string(s)
    }
}
