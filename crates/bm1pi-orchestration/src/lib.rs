//! # bm1pi-orchestration
//!
//! Timed execution, variant selection, and cross-variant comparison.

pub mod interfaces;
pub mod orchestrator;
pub mod runner;
pub mod variant_selection;

pub use interfaces::{ConversionOutput, ConversionResult, ResultPresenter};
pub use orchestrator::{
    analyze_comparison_results, execute_forward, execute_forward_all, execute_inverse,
};
pub use variant_selection::{get_forward_converters_to_run, VariantSelection};
