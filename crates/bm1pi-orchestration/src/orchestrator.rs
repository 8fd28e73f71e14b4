//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;

use bm1pi_core::converter::{ConversionError, ForwardConverter, InverseConverter};
use bm1pi_core::{DigitString, GaussianInt};
use tracing::{debug, warn};

use crate::interfaces::{ConversionOutput, ConversionResult};
use crate::runner::time_repeated;

/// Run a forward converter `repetitions` times (at least once).
pub fn execute_forward(
    conv: &dyn ForwardConverter,
    digits: DigitString,
    repetitions: u64,
) -> ConversionResult {
    let repetitions = repetitions.max(1);
    let (value, duration) = time_repeated(repetitions, || conv.to_gaussian(digits));
    debug!(variant = conv.name(), repetitions, ?duration, "forward conversion complete");

    ConversionResult {
        variant: conv.name().to_string(),
        outcome: Ok(ConversionOutput::Gaussian(value)),
        duration,
        repetitions,
    }
}

/// Run an inverse converter `repetitions` times (at least once).
pub fn execute_inverse(
    conv: &dyn InverseConverter,
    value: GaussianInt,
    repetitions: u64,
) -> ConversionResult {
    let repetitions = repetitions.max(1);
    let (outcome, duration) = time_repeated(repetitions, || conv.to_digits(value));
    debug!(variant = conv.name(), repetitions, ?duration, "inverse conversion complete");

    ConversionResult {
        variant: conv.name().to_string(),
        outcome: outcome.map(ConversionOutput::Digits),
        duration,
        repetitions,
    }
}

/// Run every given forward converter on the same digit string.
///
/// Untimed runs (`repetitions <= 1`) execute in parallel with rayon; timed
/// runs execute one after another so their durations stay comparable.
pub fn execute_forward_all(
    converters: &[Arc<dyn ForwardConverter>],
    digits: DigitString,
    repetitions: u64,
) -> Vec<ConversionResult> {
    if converters.len() == 1 || repetitions > 1 {
        return converters
            .iter()
            .map(|conv| execute_forward(conv.as_ref(), digits, repetitions))
            .collect();
    }

    // Multiple converters: run in parallel using rayon
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    converters
        .par_iter()
        .map(|conv| execute_forward(conv.as_ref(), digits, repetitions))
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Errored results are skipped; all remaining outputs must be equal.
pub fn analyze_comparison_results(results: &[ConversionResult]) -> Result<(), ConversionError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().map(|value| (r.variant.as_str(), value)));

    let Some((first_variant, first_value)) = valid.next() else {
        return Ok(());
    };

    for (variant, value) in valid {
        if value != first_value {
            warn!(
                %first_variant, %first_value, %variant, %value,
                "variants disagree"
            );
            return Err(ConversionError::Mismatch);
        }
    }
    Ok(())
}
