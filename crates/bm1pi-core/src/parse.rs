//! Parsing of textual digit strings and `real,imag` pairs.

use crate::constants::MAX_DIGITS;
use crate::digits::DigitString;
use crate::gaussian::GaussianInt;

/// Error type for textual input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No digits were given.
    #[error("empty input")]
    Empty,

    /// More digits than a digit string can hold.
    #[error("digit string has {0} digits (max {max})", max = MAX_DIGITS)]
    TooLong(usize),

    /// Digit strings are unsigned.
    #[error("a number in base (-1+i) is unsigned")]
    SignedDigitString,

    /// A character other than '0' or '1' in a digit string.
    #[error("invalid digit {digit:?} at position {position} (only '0' and '1' allowed)")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Zero-based character index.
        position: usize,
    },

    /// A Gaussian integer needs both components.
    #[error("expected <real>,<imaginary>")]
    MissingSeparator,

    /// A component of a `real,imag` pair is not an integer.
    #[error("invalid number {0:?}")]
    InvalidComponent(String),
}

/// What a positional argument denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit string, to be converted forward.
    Digits(DigitString),
    /// A Gaussian integer, to be converted back to digits.
    Gaussian(GaussianInt),
}

/// Classify and parse an argument: anything with a comma is a
/// `real,imag` pair, everything else a digit string.
pub fn parse_input(s: &str) -> Result<Input, ParseError> {
    if s.contains(',') {
        parse_gaussian(s).map(Input::Gaussian)
    } else {
        parse_digit_string(s).map(Input::Digits)
    }
}

/// Parse a digit string, most significant digit first.
pub fn parse_digit_string(s: &str) -> Result<DigitString, ParseError> {
    if s.starts_with('-') {
        return Err(ParseError::SignedDigitString);
    }
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let len = s.chars().count();
    if len > MAX_DIGITS as usize {
        return Err(ParseError::TooLong(len));
    }

    let mut bits = 0u128;
    for (position, digit) in s.chars().enumerate() {
        bits <<= 1;
        match digit {
            '1' => bits |= 1,
            '0' => {}
            _ => return Err(ParseError::InvalidDigit { digit, position }),
        }
    }
    Ok(DigitString::new(bits))
}

/// Parse `"real,imag"`; whitespace around either component is ignored.
pub fn parse_gaussian(s: &str) -> Result<GaussianInt, ParseError> {
    let (real, imag) = s.split_once(',').ok_or(ParseError::MissingSeparator)?;
    Ok(GaussianInt::new(parse_component(real)?, parse_component(imag)?))
}

fn parse_component(s: &str) -> Result<i128, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    s.parse()
        .map_err(|_| ParseError::InvalidComponent(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_basic() {
        assert_eq!(parse_digit_string("0").unwrap(), DigitString::ZERO);
        assert_eq!(parse_digit_string("1").unwrap().bits(), 1);
        assert_eq!(parse_digit_string("0001100").unwrap().bits(), 0b1100);
    }

    #[test]
    fn digits_full_width() {
        let s = "1".repeat(128);
        assert_eq!(parse_digit_string(&s).unwrap().bits(), u128::MAX);
    }

    #[test]
    fn digits_too_long() {
        let s = "0".repeat(129);
        assert_eq!(parse_digit_string(&s), Err(ParseError::TooLong(129)));
    }

    #[test]
    fn digits_signed_rejected() {
        assert_eq!(
            parse_digit_string("-101"),
            Err(ParseError::SignedDigitString)
        );
    }

    #[test]
    fn digits_invalid_character() {
        assert_eq!(
            parse_digit_string("10201"),
            Err(ParseError::InvalidDigit {
                digit: '2',
                position: 2
            })
        );
    }

    #[test]
    fn digits_empty() {
        assert_eq!(parse_digit_string(""), Err(ParseError::Empty));
    }

    #[test]
    fn gaussian_basic() {
        assert_eq!(parse_gaussian("3,-4").unwrap(), GaussianInt::new(3, -4));
        assert_eq!(parse_gaussian(" -1 , +1 ").unwrap(), GaussianInt::RADIX);
    }

    #[test]
    fn gaussian_wide_components() {
        let z = parse_gaussian("18446744073709551616,0").unwrap();
        assert_eq!(z.real, 1i128 << 64);
    }

    #[test]
    fn gaussian_errors() {
        assert_eq!(parse_gaussian("12"), Err(ParseError::MissingSeparator));
        assert_eq!(parse_gaussian("1,"), Err(ParseError::Empty));
        assert_eq!(
            parse_gaussian("1,x"),
            Err(ParseError::InvalidComponent("x".into()))
        );
        assert_eq!(
            parse_gaussian("1,2,3"),
            Err(ParseError::InvalidComponent("2,3".into()))
        );
    }

    #[test]
    fn input_classification() {
        assert_eq!(
            parse_input("110").unwrap(),
            Input::Digits(DigitString::new(0b110))
        );
        assert_eq!(
            parse_input("-3,4").unwrap(),
            Input::Gaussian(GaussianInt::new(-3, 4))
        );
        assert_eq!(parse_input("-3"), Err(ParseError::SignedDigitString));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ParseError::TooLong(130).to_string(),
            "digit string has 130 digits (max 128)"
        );
        assert_eq!(
            ParseError::SignedDigitString.to_string(),
            "a number in base (-1+i) is unsigned"
        );
    }
}
