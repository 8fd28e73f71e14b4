//! Error handling and exit codes.

use std::process::ExitCode;

use bm1pi_core::constants::exit_codes;
use bm1pi_core::{ConversionError, ParseError};

/// Option combinations the command line rejects after parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// `--compare` only cross-checks forward variants.
    #[error("--compare needs a digit string, not a real,imag pair")]
    CompareInverse,
}

/// Handle a conversion error and return the appropriate exit code.
#[must_use]
pub fn handle_error(err: &ConversionError) -> i32 {
    match err {
        ConversionError::InvalidVariant { .. } => exit_codes::ERROR_CONFIG,
        ConversionError::RepresentationOverflow { .. } => exit_codes::ERROR_OVERFLOW,
        ConversionError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Map an application error to its exit code.
#[must_use]
pub fn exit_code_value(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<ConversionError>() {
        handle_error(e)
    } else if err.downcast_ref::<ParseError>().is_some()
        || err.downcast_ref::<UsageError>().is_some()
    {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Map an application error to a process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = u8::try_from(exit_code_value(err)).unwrap_or(1);
    ExitCode::from(code)
}
