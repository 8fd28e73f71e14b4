//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use bm1pi_orchestration::ConversionOutput;
use tracing::debug;

/// Format a conversion output for display.
///
/// Gaussian integers render as `a+bi`/`a-bi`, digit strings in minimal
/// binary width (`0` for the empty string).
#[must_use]
pub fn format_output(output: &ConversionOutput) -> String {
    output.to_string()
}

/// Describe the size of a result: bit length for digit strings, norm for
/// Gaussian integers.
#[must_use]
pub fn format_size(output: &ConversionOutput) -> String {
    match output {
        ConversionOutput::Digits(d) => format!("{} digits", d.bit_len()),
        ConversionOutput::Gaussian(z) => match z.norm() {
            Some(norm) => format!("norm {norm}"),
            None => "norm > u128::MAX".to_string(),
        },
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.000_001 {
        format!("{}ns", d.as_nanos())
    } else if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write a formatted result to a file, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, text: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{text}")?;
    debug!(path = %path.display(), "result written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bm1pi_core::{DigitString, GaussianInt};

    #[test]
    fn format_output_gaussian() {
        let out = ConversionOutput::Gaussian(GaussianInt::new(3, 4));
        assert_eq!(format_output(&out), "3+4i");
        let out = ConversionOutput::Gaussian(GaussianInt::new(0, -1));
        assert_eq!(format_output(&out), "0-1i");
    }

    #[test]
    fn format_output_digits() {
        let out = ConversionOutput::Digits(DigitString::new(0b111_1101));
        assert_eq!(format_output(&out), "1111101");
        let out = ConversionOutput::Digits(DigitString::ZERO);
        assert_eq!(format_output(&out), "0");
    }

    #[test]
    fn format_size_variants() {
        let out = ConversionOutput::Digits(DigitString::new(0b1100));
        assert_eq!(format_size(&out), "4 digits");
        let out = ConversionOutput::Gaussian(GaussianInt::new(3, 4));
        assert_eq!(format_size(&out), "norm 25");
        let out = ConversionOutput::Gaussian(GaussianInt::new(i128::MIN, i128::MIN));
        assert_eq!(format_size(&out), "norm > u128::MAX");
    }

    #[test]
    fn format_duration_nano() {
        assert_eq!(format_duration(Duration::from_nanos(12)), "12ns");
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(1_500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(3_250)), "3.250s");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn write_to_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("bm1pi_output_{}.txt", std::process::id()));
        write_to_file(&path, "11101").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "11101\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_to_file_bad_path() {
        let path = Path::new("/nonexistent-dir/bm1pi/out.txt");
        assert!(write_to_file(path, "1").is_err());
    }
}
