//! Variant selection logic.

use std::sync::Arc;

use bm1pi_core::converter::{ConversionError, ForwardConverter};
use bm1pi_core::registry::ConverterFactory;

/// Which forward variants to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSelection {
    /// A single variant by index.
    One(usize),
    /// Every registered forward variant.
    All,
}

/// Get forward converters to run based on the selection.
pub fn get_forward_converters_to_run(
    selection: VariantSelection,
    factory: &dyn ConverterFactory,
) -> Result<Vec<Arc<dyn ForwardConverter>>, ConversionError> {
    match selection {
        VariantSelection::All => factory
            .forward_variants()
            .into_iter()
            .map(|variant| factory.forward(variant))
            .collect(),
        VariantSelection::One(variant) => Ok(vec![factory.forward(variant)?]),
    }
}
