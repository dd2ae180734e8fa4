//! Dropkit component assembly library.
//!
//! This crate turns a merchant's payment-methods descriptor into a list of
//! ready-to-render payment components. It owns the decision logic only:
//! which component type matches which payment method, which configuration
//! options apply, and when to degrade gracefully because required
//! configuration is missing. Rendering, encryption and key fetching live
//! behind narrow collaborator traits.
//!
//! # Architecture
//!
//! - **Methods**: the payment-method data model decoded from the backend
//!   descriptor (`PaymentMethods`)
//! - **Factory**: per-method construction rules (`ComponentFactory`)
//! - **Manager**: owns configuration, style and payment context and drives
//!   the filter/build/partition pipeline once (`ComponentManager`)
//!
//! # Example
//!
//! ```ignore
//! use dropkit_lib::prelude::*;
//!
//! let methods = PaymentMethods::from_json(descriptor_json)?;
//! let configuration = Configuration::new().with_client_key("live_XXXX");
//! let payment = Payment::new(Amount::new(1742, "EUR"), "NL");
//!
//! let manager = ComponentManager::new(methods, Some(payment), configuration, DropInStyle::default());
//! let sections = manager.components();
//! println!("{} stored, {} regular", sections.stored.len(), sections.regular.len());
//! ```

use serde::{Deserialize, Serialize};

pub mod collaborators;
pub mod components;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod factory;
pub mod manager;
pub mod methods;
pub mod prelude;
pub mod sections;
pub mod style;

pub use errors::{DropkitError, DropkitErrorCode};
pub use manager::ComponentManager;
pub use sections::SectionedComponents;

/// Common result alias for Dropkit operations.
pub type Result<T> = std::result::Result<T, DropkitError>;

/// Network environment the SDK submits payments against.
///
/// Components are stamped with the environment at construction time so that
/// later submission traffic targets the right backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production endpoints.
    #[default]
    Live,
    /// Test endpoints.
    Test,
}

impl Environment {
    /// Returns true for the production environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

/// A monetary amount in minor units (e.g. cents).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// The amount in minor units.
    pub value: i64,
    /// ISO 4217 currency code.
    #[serde(rename = "currencyCode")]
    pub currency: String,
}

impl Amount {
    /// Create a new amount.
    pub fn new(value: i64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// The payment context for the current checkout session.
///
/// Optional at the SDK boundary: only wallet-type methods require it, and
/// its absence excludes those methods instead of failing assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// The amount to charge.
    pub amount: Amount,
    /// ISO 3166-1 alpha-2 country code of the shopper.
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

impl Payment {
    /// Create a new payment context.
    pub fn new(amount: Amount, country_code: impl Into<String>) -> Self {
        Self {
            amount,
            country_code: country_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_default_is_live() {
        assert_eq!(Environment::default(), Environment::Live);
        assert!(Environment::Live.is_live());
        assert!(!Environment::Test.is_live());
    }

    #[test]
    fn test_amount_display() {
        let amount = Amount::new(1742, "EUR");
        assert_eq!(format!("{}", amount), "1742 EUR");
    }

    #[test]
    fn test_payment_deserializes_wire_shape() {
        let payment: Payment =
            serde_json::from_str(r#"{"amount":{"value":174,"currencyCode":"EUR"},"countryCode":"NL"}"#)
                .unwrap();
        assert_eq!(payment.amount.value, 174);
        assert_eq!(payment.amount.currency, "EUR");
        assert_eq!(payment.country_code, "NL");
    }
}
