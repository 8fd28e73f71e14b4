//! Converter factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::batch::BatchConverter;
use crate::constants::{BATCH_VARIANT, PARITY_VARIANT, RECURRENCE_VARIANT, SCALAR_VARIANT};
use crate::converter::{ConversionError, Direction, ForwardConverter, InverseConverter};
use crate::inverse::ParityInverse;
use crate::recurrence::RecurrenceConverter;
use crate::scalar::ScalarConverter;

/// Factory trait for looking up converters by variant index.
pub trait ConverterFactory: Send + Sync {
    /// Get or create the forward converter for a variant.
    fn forward(&self, variant: usize) -> Result<Arc<dyn ForwardConverter>, ConversionError>;

    /// Get or create the inverse converter for a variant.
    fn inverse(&self, variant: usize) -> Result<Arc<dyn InverseConverter>, ConversionError>;

    /// List all forward variant indices.
    fn forward_variants(&self) -> Vec<usize>;
}

/// Default factory with lazy creation and cache.
///
/// Construction work (such as SIMD kernel detection) happens on the first
/// lookup of a variant, never inside a conversion call.
pub struct DefaultFactory {
    forward_cache: RwLock<HashMap<usize, Arc<dyn ForwardConverter>>>,
    inverse_cache: RwLock<HashMap<usize, Arc<dyn InverseConverter>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forward_cache: RwLock::new(HashMap::new()),
            inverse_cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_forward(variant: usize) -> Result<Arc<dyn ForwardConverter>, ConversionError> {
        match variant {
            SCALAR_VARIANT => Ok(Arc::new(ScalarConverter::new())),
            BATCH_VARIANT => Ok(Arc::new(BatchConverter::new())),
            RECURRENCE_VARIANT => Ok(Arc::new(RecurrenceConverter::new())),
            _ => Err(ConversionError::InvalidVariant {
                direction: Direction::Forward,
                variant,
            }),
        }
    }

    fn create_inverse(variant: usize) -> Result<Arc<dyn InverseConverter>, ConversionError> {
        match variant {
            PARITY_VARIANT => Ok(Arc::new(ParityInverse::new())),
            _ => Err(ConversionError::InvalidVariant {
                direction: Direction::Inverse,
                variant,
            }),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterFactory for DefaultFactory {
    fn forward(&self, variant: usize) -> Result<Arc<dyn ForwardConverter>, ConversionError> {
        // Check cache first
        if let Some(conv) = self.forward_cache.read().get(&variant) {
            return Ok(Arc::clone(conv));
        }

        // Create and cache
        let conv = Self::create_forward(variant)?;
        debug!(variant, name = conv.name(), "forward converter created");
        self.forward_cache.write().insert(variant, Arc::clone(&conv));
        Ok(conv)
    }

    fn inverse(&self, variant: usize) -> Result<Arc<dyn InverseConverter>, ConversionError> {
        if let Some(conv) = self.inverse_cache.read().get(&variant) {
            return Ok(Arc::clone(conv));
        }

        let conv = Self::create_inverse(variant)?;
        debug!(variant, name = conv.name(), "inverse converter created");
        self.inverse_cache.write().insert(variant, Arc::clone(&conv));
        Ok(conv)
    }

    fn forward_variants(&self) -> Vec<usize> {
        vec![SCALAR_VARIANT, BATCH_VARIANT, RECURRENCE_VARIANT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_scalar() {
        let factory = DefaultFactory::new();
        let conv = factory.forward(0);
        assert!(conv.is_ok());
        assert_eq!(conv.unwrap().name(), "Scalar");
    }

    #[test]
    fn factory_creates_batch() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.forward(1).unwrap().name(), "Batch");
    }

    #[test]
    fn factory_creates_recurrence() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.forward(2).unwrap().name(), "Recurrence");
    }

    #[test]
    fn factory_creates_inverse() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.inverse(0).unwrap().name(), "ParityExtraction");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let conv1 = factory.forward(1).unwrap();
        let conv2 = factory.forward(1).unwrap();
        assert!(Arc::ptr_eq(&conv1, &conv2));

        let inv1 = factory.inverse(0).unwrap();
        let inv2 = factory.inverse(0).unwrap();
        assert!(Arc::ptr_eq(&inv1, &inv2));
    }

    #[test]
    fn factory_unknown_forward_variant() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            factory.forward(3),
            Err(ConversionError::InvalidVariant {
                direction: Direction::Forward,
                variant: 3
            })
        ));
    }

    #[test]
    fn factory_inverse_only_variant_zero() {
        let factory = DefaultFactory::new();
        for variant in [1, 2, 7] {
            assert!(matches!(
                factory.inverse(variant),
                Err(ConversionError::InvalidVariant {
                    direction: Direction::Inverse,
                    ..
                })
            ));
        }
    }

    #[test]
    fn factory_forward_variants() {
        let factory = DefaultFactory::new();
        let variants = factory.forward_variants();
        assert_eq!(variants, [0, 1, 2]);
        for variant in variants {
            assert!(factory.forward(variant).is_ok());
        }
    }
}
