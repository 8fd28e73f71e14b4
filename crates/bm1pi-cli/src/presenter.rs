//! CLI result presenter.

use bm1pi_orchestration::interfaces::{ConversionResult, ResultPresenter};

use crate::output::{format_duration, format_number, format_output, format_size};

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &ConversionResult, timed: bool, details: bool) {
        let value = match &result.outcome {
            Ok(value) => value,
            Err(e) => {
                self.present_error(&e.to_string());
                return;
            }
        };

        if self.quiet {
            println!("{}", format_output(value));
            return;
        }

        if details {
            println!("Variant: {}", result.variant);
            println!("Size: {}", format_size(value));
        }

        if timed {
            println!("Repetitions: {}", format_number(result.repetitions));
            println!("Total time: {}", format_duration(result.duration));
            println!("Average per call: {}", format_duration(result.average()));
        }

        println!("{}", format_output(value));
    }

    fn present_comparison(&self, results: &[ConversionResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<72}", "");
        for result in results {
            let (shown, status) = match &result.outcome {
                Ok(value) => (format_output(value), "OK"),
                Err(_) => (String::new(), "ERROR"),
            };
            println!(
                "  {:<12} {:>12} [{}] {}",
                result.variant,
                format_duration(result.average()),
                status,
                shown,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
