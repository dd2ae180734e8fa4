//! Capability filtering and section partitioning.
//!
//! Stored instruments are filtered down to those usable with the shopper
//! present, then both groups map through the factory. Order is preserved
//! end to end; unbuildable methods simply drop out. Stored and regular
//! components never interleave.

use std::fmt;

use crate::components::PaymentComponent;
use crate::methods::PaymentMethod;

/// Keep only instruments usable with the shopper present.
///
/// Pure and order-preserving.
pub fn filter_shopper_present(methods: &[PaymentMethod]) -> Vec<&PaymentMethod> {
    methods
        .iter()
        .filter(|method| method.supports_shopper_present())
        .collect()
}

/// Constructed components, grouped for presentation.
pub struct SectionedComponents {
    /// Components for saved instruments, in descriptor order.
    pub stored: Vec<Box<dyn PaymentComponent>>,
    /// Components for regular methods, in descriptor order.
    pub regular: Vec<Box<dyn PaymentComponent>>,
}

impl SectionedComponents {
    /// Total number of components across both sections.
    pub fn len(&self) -> usize {
        self.stored.len() + self.regular.len()
    }

    /// Whether no components were built at all.
    pub fn is_empty(&self) -> bool {
        self.stored.is_empty() && self.regular.is_empty()
    }
}

impl fmt::Debug for SectionedComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionedComponents")
            .field("stored", &self.stored.len())
            .field("regular", &self.regular.len())
            .finish()
    }
}

/// Filter stored methods, then map both groups through the factory.
///
/// `None` results are discarded; everything else keeps its input order.
pub fn partition<F>(
    stored: &[PaymentMethod],
    regular: &[PaymentMethod],
    build: F,
) -> SectionedComponents
where
    F: Fn(&PaymentMethod) -> Option<Box<dyn PaymentComponent>>,
{
    SectionedComponents {
        stored: filter_shopper_present(stored)
            .into_iter()
            .filter_map(|method| build(method))
            .collect(),
        regular: regular.iter().filter_map(|method| build(method)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::EmptyComponent;
    use crate::methods::{
        GenericPaymentMethod, ShopperInteraction, StoredInstrumentPaymentMethod,
    };

    fn stored(id: &str, interactions: Vec<ShopperInteraction>) -> PaymentMethod {
        PaymentMethod::StoredInstrument(StoredInstrumentPaymentMethod {
            id: id.into(),
            type_tag: "paypal".into(),
            name: "PayPal".into(),
            supported_shopper_interactions: interactions,
        })
    }

    fn regular(tag: &str) -> PaymentMethod {
        PaymentMethod::Other(GenericPaymentMethod {
            type_tag: tag.into(),
            name: tag.into(),
        })
    }

    #[test]
    fn test_filter_keeps_shopper_present_in_order() {
        let methods = vec![
            stored("a", vec![ShopperInteraction::ShopperPresent]),
            stored("b", vec![ShopperInteraction::ShopperNotPresent]),
            stored(
                "c",
                vec![
                    ShopperInteraction::ShopperNotPresent,
                    ShopperInteraction::ShopperPresent,
                ],
            ),
        ];
        let kept = filter_shopper_present(&methods);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], &methods[0]);
        assert_eq!(kept[1], &methods[2]);
    }

    #[test]
    fn test_partition_preserves_order_and_drops_none() {
        let stored_methods = vec![
            stored("a", vec![ShopperInteraction::ShopperPresent]),
            stored("b", vec![ShopperInteraction::ShopperPresent]),
        ];
        let regular_methods = vec![regular("alpha"), regular("skipme"), regular("omega")];

        let sections = partition(&stored_methods, &regular_methods, |method| {
            if method.type_tag() == "skipme" {
                return None;
            }
            Some(Box::new(EmptyComponent::new(method.clone())) as Box<dyn PaymentComponent>)
        });

        assert_eq!(sections.stored.len(), 2);
        assert_eq!(sections.regular.len(), 2);
        assert_eq!(sections.regular[0].payment_method().type_tag(), "alpha");
        assert_eq!(sections.regular[1].payment_method().type_tag(), "omega");
        assert_eq!(sections.len(), 4);
        assert!(!sections.is_empty());
    }

    #[test]
    fn test_partition_of_empty_input_is_empty() {
        let sections = partition(&[], &[], |method| {
            Some(Box::new(EmptyComponent::new(method.clone())) as Box<dyn PaymentComponent>)
        });
        assert!(sections.is_empty());
        assert_eq!(format!("{sections:?}"), "SectionedComponents { stored: 0, regular: 0 }");
    }
}
