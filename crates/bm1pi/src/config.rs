//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// Convert between base (-1+i) digit strings and Gaussian integers.
///
/// A digit string such as `1101` is evaluated at b = -1+i. A pair such as
/// `3,-4` is expanded into its canonical digit string.
#[derive(Parser, Debug)]
#[command(name = "bm1pi", version, about, disable_version_flag = true)]
pub struct AppConfig {
    /// Digit string ("1101") or real,imag pair ("3,-4").
    #[arg(allow_hyphen_values = true, required_unless_present = "completion")]
    pub input: Option<String>,

    /// Implementation variant: 0 scalar, 1 batch, 2 recurrence (inverse: 0).
    #[arg(short = 'V', long, default_value_t = 0, env = "BM1PI_VARIANT")]
    pub variant: usize,

    /// Time REPS repetitions of the selected variant.
    #[arg(short = 'B', long, value_name = "REPS", value_parser = clap::value_parser!(u64).range(1..))]
    pub benchmark: Option<u64>,

    /// Run every forward variant and cross-check the results.
    #[arg(long)]
    pub compare: bool,

    /// Show the variant name and result size.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write the result to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Print version.
    #[arg(long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Number of timed repetitions (1 when not benchmarking).
    #[must_use]
    pub fn repetitions(&self) -> u64 {
        self.benchmark.unwrap_or(1)
    }

    /// Whether timing output was requested.
    #[must_use]
    pub fn timed(&self) -> bool {
        self.benchmark.is_some()
    }
}
