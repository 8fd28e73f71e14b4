//! Orchestration interfaces.

use std::fmt;
use std::time::Duration;

use bm1pi_core::{ConversionError, DigitString, GaussianInt};

/// Value produced by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutput {
    /// Result of a forward conversion.
    Gaussian(GaussianInt),
    /// Result of an inverse conversion.
    Digits(DigitString),
}

impl fmt::Display for ConversionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaussian(z) => fmt::Display::fmt(z, f),
            Self::Digits(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// Result of running one variant, possibly many times.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Variant name.
    pub variant: String,
    /// The converted value or a structured error.
    pub outcome: Result<ConversionOutput, ConversionError>,
    /// Wall-clock time for all repetitions.
    pub duration: Duration,
    /// Number of timed invocations.
    pub repetitions: u64,
}

impl ConversionResult {
    /// Mean duration of a single invocation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Duration {
        match u32::try_from(self.repetitions) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.duration / n,
            Err(_) => Duration::from_secs_f64(self.duration.as_secs_f64() / self.repetitions as f64),
        }
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a conversion result.
    fn present_result(&self, result: &ConversionResult, timed: bool, details: bool);

    /// Present a comparison of several variants.
    fn present_comparison(&self, results: &[ConversionResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(duration: Duration, repetitions: u64) -> ConversionResult {
        ConversionResult {
            variant: "Scalar".into(),
            outcome: Ok(ConversionOutput::Gaussian(GaussianInt::new(2, 0))),
            duration,
            repetitions,
        }
    }

    #[test]
    fn output_display() {
        assert_eq!(
            ConversionOutput::Gaussian(GaussianInt::new(-6, -3)).to_string(),
            "-6-3i"
        );
        assert_eq!(
            ConversionOutput::Digits(DigitString::new(0b11101)).to_string(),
            "11101"
        );
        assert_eq!(ConversionOutput::Digits(DigitString::ZERO).to_string(), "0");
    }

    #[test]
    fn average_divides_by_repetitions() {
        let r = result(Duration::from_millis(100), 4);
        assert_eq!(r.average(), Duration::from_millis(25));
    }

    #[test]
    fn average_zero_repetitions() {
        let r = result(Duration::from_millis(100), 0);
        assert_eq!(r.average(), Duration::ZERO);
    }

    #[test]
    fn average_huge_repetitions() {
        let r = result(Duration::from_secs(10_000), 10_000_000_000);
        let avg = r.average();
        assert!(avg >= Duration::from_nanos(999) && avg <= Duration::from_nanos(1001));
    }
}
