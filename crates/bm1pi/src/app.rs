//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use bm1pi_cli::output::{format_output, write_to_file};
use bm1pi_cli::presenter::CLIResultPresenter;
use bm1pi_core::registry::{ConverterFactory, DefaultFactory};
use bm1pi_core::{parse_input, DigitString, GaussianInt, Input};
use bm1pi_orchestration::interfaces::{ConversionResult, ResultPresenter};
use bm1pi_orchestration::orchestrator::{
    analyze_comparison_results, execute_forward_all, execute_inverse,
};
use bm1pi_orchestration::variant_selection::{get_forward_converters_to_run, VariantSelection};

use crate::config::AppConfig;
use crate::errors::UsageError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bm1pi_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    debug!(version = %full_version(), variant = config.variant, "starting");

    let raw = config.input.as_deref().context("missing <INPUT>")?;
    let input = parse_input(raw)?;
    let factory = DefaultFactory::new();
    let presenter = CLIResultPresenter::new(config.quiet);

    let result = match input {
        Input::Digits(digits) => run_forward(config, &factory, &presenter, digits)?,
        Input::Gaussian(_) if config.compare => return Err(UsageError::CompareInverse.into()),
        Input::Gaussian(value) => run_inverse(config, &factory, &presenter, value)?,
    };

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Ok(value) = &result.outcome {
            write_to_file(path, &format_output(value))
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    Ok(())
}

fn run_forward(
    config: &AppConfig,
    factory: &dyn ConverterFactory,
    presenter: &dyn ResultPresenter,
    digits: DigitString,
) -> Result<ConversionResult> {
    let selection = if config.compare {
        VariantSelection::All
    } else {
        VariantSelection::One(config.variant)
    };
    let converters = get_forward_converters_to_run(selection, factory)?;
    let results = execute_forward_all(&converters, digits, config.repetitions());

    if results.len() > 1 {
        let agreement = analyze_comparison_results(&results);
        if let Some(first) = results.first() {
            presenter.present_result(first, config.timed(), config.details);
        }
        presenter.present_comparison(&results);
        agreement?;
    } else if let Some(result) = results.first() {
        presenter.present_result(result, config.timed(), config.details);
    }

    results
        .into_iter()
        .next()
        .context("no forward variant selected")
}

fn run_inverse(
    config: &AppConfig,
    factory: &dyn ConverterFactory,
    presenter: &dyn ResultPresenter,
    value: GaussianInt,
) -> Result<ConversionResult> {
    let converter = factory.inverse(config.variant)?;
    let result = execute_inverse(converter.as_ref(), value, config.repetitions());

    if let Err(e) = &result.outcome {
        return Err(e.clone().into());
    }
    presenter.present_result(&result, config.timed(), config.details);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::errors::exit_code_value;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("bm1pi").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn forward_each_variant() {
        for variant in ["0", "1", "2"] {
            assert!(run(&config(&["-q", "-V", variant, "1100"])).is_ok());
        }
    }

    #[test]
    fn inverse_succeeds() {
        assert!(run(&config(&["-q", "3,4"])).is_ok());
    }

    #[test]
    fn inverse_unknown_variant() {
        let err = run(&config(&["-q", "-V", "1", "3,4"])).unwrap_err();
        assert_eq!(exit_code_value(&err), 4);
    }

    #[test]
    fn forward_unknown_variant() {
        let err = run(&config(&["-q", "-V", "3", "1"])).unwrap_err();
        assert_eq!(exit_code_value(&err), 4);
    }

    #[test]
    fn inverse_overflow() {
        let err = run(&config(&["-q", "18446744073709551616,0"])).unwrap_err();
        assert_eq!(exit_code_value(&err), 5);
    }

    #[test]
    fn malformed_input() {
        for input in ["", "12", "-101", "3;4", "x,1"] {
            let err = run(&config(&["-q", input])).unwrap_err();
            assert_eq!(exit_code_value(&err), 4, "{input:?}");
        }
    }

    #[test]
    fn compare_forward() {
        assert!(run(&config(&["--compare", "-q", "1010101010"])).is_ok());
        assert!(run(&config(&["--compare", "-B", "10", "1111"])).is_ok());
    }

    #[test]
    fn compare_rejects_pair() {
        let err = run(&config(&["--compare", "1,1"])).unwrap_err();
        assert_eq!(exit_code_value(&err), 4);
    }

    #[test]
    fn benchmark_mode() {
        assert!(run(&config(&["-B", "100", "-d", "-V", "1", "11101"])).is_ok());
        assert!(run(&config(&["-B", "100", "-1,0"])).is_ok());
    }

    #[test]
    fn output_file_written() {
        let path = std::env::temp_dir().join(format!("bm1pi_app_{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();
        run(&config(&["-q", "-o", path_str, "0,-3"])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "110011\n");
        std::fs::remove_file(&path).unwrap();
    }
}
