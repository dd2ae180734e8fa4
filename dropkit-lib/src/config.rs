//! Configuration supplied once when the drop-in is created.
//!
//! The configuration is immutable: the assembly pipeline reads it but never
//! writes it back. Missing optional pieces degrade the affected methods
//! instead of failing assembly.

use serde::{Deserialize, Serialize};

/// Top-level configuration for component assembly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Frontend-safe credential for tokenization/encryption endpoints.
    pub client_key: Option<String>,
    /// Older directly-configured encryption key; client key takes precedence.
    pub legacy_public_key: Option<String>,
    /// Card form display toggles.
    pub card: CardConfiguration,
    /// Wallet (Apple Pay) merchant configuration.
    pub wallet: WalletConfiguration,
    /// Locale overrides forwarded to localizable components.
    pub localization_parameters: Option<LocalizationParameters>,
}

impl Configuration {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client key.
    pub fn with_client_key(mut self, key: impl Into<String>) -> Self {
        self.client_key = Some(key.into());
        self
    }

    /// Set the legacy public key.
    pub fn with_legacy_public_key(mut self, key: impl Into<String>) -> Self {
        self.legacy_public_key = Some(key.into());
        self
    }

    /// Set the card form display toggles.
    pub fn with_card(mut self, card: CardConfiguration) -> Self {
        self.card = card;
        self
    }

    /// Set the wallet merchant configuration.
    pub fn with_wallet(mut self, wallet: WalletConfiguration) -> Self {
        self.wallet = wallet;
        self
    }

    /// Set locale overrides.
    pub fn with_localization_parameters(mut self, parameters: LocalizationParameters) -> Self {
        self.localization_parameters = Some(parameters);
        self
    }
}

/// Display toggles for the card entry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfiguration {
    /// Whether the form asks for the cardholder name.
    pub shows_holder_name_field: bool,
    /// Whether the form offers to store the card.
    pub shows_store_payment_method_field: bool,
    /// Whether the form asks for the security code.
    pub shows_security_code_field: bool,
}

impl Default for CardConfiguration {
    fn default() -> Self {
        Self {
            shows_holder_name_field: false,
            shows_store_payment_method_field: true,
            shows_security_code_field: true,
        }
    }
}

/// Merchant configuration for the Apple Pay wallet.
///
/// `summary_items` and `merchant_identifier` are both required to build the
/// wallet component; leaving either unset excludes the method.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletConfiguration {
    /// Line items shown on the payment sheet; the last item is the total.
    pub summary_items: Option<Vec<SummaryItem>>,
    /// Merchant identifier registered with the platform.
    pub merchant_identifier: Option<String>,
    /// Billing contact fields the payment sheet must collect.
    pub required_billing_contact_fields: Vec<String>,
    /// Shipping contact fields the payment sheet must collect.
    pub required_shipping_contact_fields: Vec<String>,
}

impl WalletConfiguration {
    /// Set the summary line items.
    pub fn with_summary_items(mut self, items: Vec<SummaryItem>) -> Self {
        self.summary_items = Some(items);
        self
    }

    /// Set the merchant identifier.
    pub fn with_merchant_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.merchant_identifier = Some(identifier.into());
        self
    }
}

/// One line item on the wallet payment sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItem {
    /// Label shown to the shopper.
    pub label: String,
    /// Amount in minor units; may be negative for discounts, except the
    /// final (grand total) item.
    pub amount: i64,
}

impl SummaryItem {
    /// Create a new summary item.
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Locale overrides forwarded to components that render localized text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizationParameters {
    /// Locale identifier override (e.g. "nl-NL").
    pub locale: Option<String>,
    /// Strings table override.
    pub table_name: Option<String>,
}

impl LocalizationParameters {
    /// Create parameters with a locale override.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            table_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_configuration_defaults() {
        let card = CardConfiguration::default();
        assert!(!card.shows_holder_name_field);
        assert!(card.shows_store_payment_method_field);
        assert!(card.shows_security_code_field);
    }

    #[test]
    fn test_builder_chain() {
        let configuration = Configuration::new()
            .with_client_key("live_abc")
            .with_wallet(
                WalletConfiguration::default()
                    .with_merchant_identifier("merchant.com.example")
                    .with_summary_items(vec![SummaryItem::new("Total", 1742)]),
            );
        assert_eq!(configuration.client_key.as_deref(), Some("live_abc"));
        assert!(configuration.legacy_public_key.is_none());
        assert_eq!(
            configuration.wallet.merchant_identifier.as_deref(),
            Some("merchant.com.example")
        );
    }

    #[test]
    fn test_configuration_deserializes_with_defaults() {
        let configuration: Configuration =
            serde_json::from_str(r#"{ "clientKey": "live_abc" }"#).unwrap();
        assert_eq!(configuration.client_key.as_deref(), Some("live_abc"));
        assert_eq!(configuration.card, CardConfiguration::default());
        assert!(configuration.wallet.summary_items.is_none());
    }
}
