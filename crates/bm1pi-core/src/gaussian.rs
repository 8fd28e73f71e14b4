//! Gaussian integers with 128-bit components.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::parse::{parse_gaussian, ParseError};

/// A complex number with integer real and imaginary parts.
///
/// Components are `i128`: every value reachable from a 128-digit string
/// has components below 2^64 in magnitude, which leaves headroom for the
/// intermediate sums of the forward converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GaussianInt {
    /// Real part.
    pub real: i128,
    /// Imaginary part.
    pub imag: i128,
}

impl GaussianInt {
    /// 0 + 0i.
    pub const ZERO: Self = Self::new(0, 0);

    /// 1 + 0i.
    pub const ONE: Self = Self::new(1, 0);

    /// The radix b = −1 + i.
    pub const RADIX: Self = Self::new(-1, 1);

    #[must_use]
    pub const fn new(real: i128, imag: i128) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.real == 0 && self.imag == 0
    }

    /// Multiply by the radix: (a + bi)(−1 + i) = (−a − b) + (a − b)i.
    ///
    /// Panics on overflow in debug builds; use [`checked_mul_radix`](Self::checked_mul_radix)
    /// for untrusted values.
    #[must_use]
    pub const fn mul_radix(self) -> Self {
        Self::new(-self.real - self.imag, self.real - self.imag)
    }

    #[must_use]
    pub fn checked_mul_radix(self) -> Option<Self> {
        let real = self.real.checked_neg()?.checked_sub(self.imag)?;
        let imag = self.real.checked_sub(self.imag)?;
        Some(Self::new(real, imag))
    }

    /// The norm a² + b², or `None` if it does not fit in a `u128`.
    #[must_use]
    pub fn norm(self) -> Option<u128> {
        let real = self.real.unsigned_abs();
        let imag = self.imag.unsigned_abs();
        real.checked_mul(real)?.checked_add(imag.checked_mul(imag)?)
    }
}

impl From<(i128, i128)> for GaussianInt {
    fn from((real, imag): (i128, i128)) -> Self {
        Self::new(real, imag)
    }
}

impl From<GaussianInt> for (i128, i128) {
    fn from(value: GaussianInt) -> Self {
        (value.real, value.imag)
    }
}

impl Add for GaussianInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl AddAssign for GaussianInt {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imag += rhs.imag;
    }
}

impl fmt::Display for GaussianInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag < 0 {
            write!(f, "{}{}i", self.real, self.imag)
        } else {
            write!(f, "{}+{}i", self.real, self.imag)
        }
    }
}

impl FromStr for GaussianInt {
    type Err = ParseError;

    /// Parse the `"real,imag"` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_gaussian(s)
    }
}
