//! Apple Pay wallet component.

use super::{impl_payment_component, ComponentCore};
use crate::config::SummaryItem;
use crate::methods::PaymentMethod;
use crate::{DropkitError, Payment, Result};

/// Apple Pay payment sheet component.
///
/// Construction validates the merchant configuration and returns `Err` for
/// malformed input; the factory maps that to "no component" plus a
/// diagnostic, never surfacing the error to the caller. The payment sheet
/// renders platform text, so the component is not localizable.
#[derive(Clone, Debug)]
pub struct ApplePayComponent {
    payment_method: PaymentMethod,
    payment: Payment,
    merchant_identifier: String,
    summary_items: Vec<SummaryItem>,
    required_billing_contact_fields: Vec<String>,
    required_shipping_contact_fields: Vec<String>,
    core: ComponentCore,
}

impl ApplePayComponent {
    /// Create an Apple Pay component, validating the merchant configuration.
    pub fn new(
        payment_method: PaymentMethod,
        payment: Payment,
        merchant_identifier: String,
        summary_items: Vec<SummaryItem>,
        required_billing_contact_fields: Vec<String>,
        required_shipping_contact_fields: Vec<String>,
    ) -> Result<Self> {
        let method = payment_method.type_tag().to_owned();
        if merchant_identifier.is_empty() {
            return Err(DropkitError::ConstructionFailure {
                method,
                reason: "merchant identifier must not be empty".into(),
            });
        }
        if summary_items.is_empty() {
            return Err(DropkitError::ConstructionFailure {
                method,
                reason: "summary items must not be empty".into(),
            });
        }
        // The last summary item is the grand total shown on the sheet.
        if summary_items.last().is_some_and(|item| item.amount < 0) {
            return Err(DropkitError::ConstructionFailure {
                method,
                reason: "grand total must not be negative".into(),
            });
        }

        Ok(Self {
            payment_method,
            payment,
            merchant_identifier,
            summary_items,
            required_billing_contact_fields,
            required_shipping_contact_fields,
            core: ComponentCore::default(),
        })
    }

    /// The payment context backing the sheet.
    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    /// The merchant identifier registered with the platform.
    pub fn merchant_identifier(&self) -> &str {
        &self.merchant_identifier
    }

    /// The line items shown on the sheet.
    pub fn summary_items(&self) -> &[SummaryItem] {
        &self.summary_items
    }

    /// Billing contact fields the sheet collects.
    pub fn required_billing_contact_fields(&self) -> &[String] {
        &self.required_billing_contact_fields
    }

    /// Shipping contact fields the sheet collects.
    pub fn required_shipping_contact_fields(&self) -> &[String] {
        &self.required_shipping_contact_fields
    }
}

impl_payment_component!(ApplePayComponent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::ApplePayPaymentMethod;
    use crate::Amount;

    fn method() -> PaymentMethod {
        PaymentMethod::ApplePay(ApplePayPaymentMethod {
            name: "Apple Pay".into(),
        })
    }

    fn payment() -> Payment {
        Payment::new(Amount::new(1742, "EUR"), "NL")
    }

    #[test]
    fn test_valid_configuration_builds() {
        let component = ApplePayComponent::new(
            method(),
            payment(),
            "merchant.com.example".into(),
            vec![SummaryItem::new("Total", 1742)],
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(component.merchant_identifier(), "merchant.com.example");
        assert_eq!(component.summary_items().len(), 1);
    }

    #[test]
    fn test_empty_summary_items_rejected() {
        let err = ApplePayComponent::new(
            method(),
            payment(),
            "merchant.com.example".into(),
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains("summary items"));
    }

    #[test]
    fn test_negative_grand_total_rejected() {
        let err = ApplePayComponent::new(
            method(),
            payment(),
            "merchant.com.example".into(),
            vec![
                SummaryItem::new("Discount", -500),
                SummaryItem::new("Total", -100),
            ],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains("grand total"));
    }

    #[test]
    fn test_discount_items_before_total_allowed() {
        let component = ApplePayComponent::new(
            method(),
            payment(),
            "merchant.com.example".into(),
            vec![
                SummaryItem::new("Item", 2000),
                SummaryItem::new("Discount", -258),
                SummaryItem::new("Total", 1742),
            ],
            vec![],
            vec![],
        );
        assert!(component.is_ok());
    }
}
