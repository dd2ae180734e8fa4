//! Constructed payment components.
//!
//! A component is the factory's output: an opaque handle the presentation
//! layer can render, tagged with the payment method it was built from and
//! carrying the credential/environment/localization context stamped on it
//! right after construction. The assembly core never mutates a component
//! after handoff.
//!
//! Localization support is a capability, not a type: components that render
//! localized text opt in through [`PaymentComponent::as_localizable_mut`],
//! and the factory checks the capability instead of matching on the
//! concrete type.

use std::any::Any;

use crate::config::LocalizationParameters;
use crate::methods::PaymentMethod;
use crate::Environment;

mod card;
mod empty;
mod form;
mod issuer_list;
mod stored;
mod wallet;

pub use card::{BankCardComponent, CardComponent};
pub use empty::EmptyComponent;
pub use form::{MbWayComponent, QiwiWalletComponent, SepaDirectDebitComponent};
pub use issuer_list::IssuerListComponent;
pub use stored::StoredInstrumentComponent;
pub use wallet::ApplePayComponent;

/// A constructed, renderable payment component.
pub trait PaymentComponent: Send + Sync {
    /// The payment method this component was built from.
    fn payment_method(&self) -> &PaymentMethod;

    /// The client key stamped on the component, if any.
    fn client_key(&self) -> Option<&str>;

    /// Stamp the client key.
    fn set_client_key(&mut self, key: String);

    /// The network environment the component submits against.
    fn environment(&self) -> Environment;

    /// Stamp the network environment.
    fn set_environment(&mut self, environment: Environment);

    /// Capability hook: components that render localized text return
    /// themselves here; everything else keeps the default `None`.
    fn as_localizable_mut(&mut self) -> Option<&mut dyn Localizable> {
        None
    }

    /// Downcast support for callers that need the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Capability for components that render localized text.
pub trait Localizable {
    /// The locale overrides currently applied.
    fn localization_parameters(&self) -> Option<&LocalizationParameters>;

    /// Apply locale overrides.
    fn set_localization_parameters(&mut self, parameters: LocalizationParameters);
}

/// Context stamped onto every component after construction.
#[derive(Clone, Debug, Default)]
pub(crate) struct ComponentCore {
    pub(crate) client_key: Option<String>,
    pub(crate) environment: Environment,
}

/// Implements [`PaymentComponent`] for a component struct with
/// `payment_method` and `core` fields. The `localizable` form additionally
/// wires the capability through a `localization_parameters` field.
macro_rules! impl_payment_component {
    ($component:ty) => {
        impl $crate::components::PaymentComponent for $component {
            fn payment_method(&self) -> &$crate::methods::PaymentMethod {
                &self.payment_method
            }

            fn client_key(&self) -> Option<&str> {
                self.core.client_key.as_deref()
            }

            fn set_client_key(&mut self, key: String) {
                self.core.client_key = Some(key);
            }

            fn environment(&self) -> $crate::Environment {
                self.core.environment
            }

            fn set_environment(&mut self, environment: $crate::Environment) {
                self.core.environment = environment;
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
    ($component:ty, localizable) => {
        impl $crate::components::PaymentComponent for $component {
            fn payment_method(&self) -> &$crate::methods::PaymentMethod {
                &self.payment_method
            }

            fn client_key(&self) -> Option<&str> {
                self.core.client_key.as_deref()
            }

            fn set_client_key(&mut self, key: String) {
                self.core.client_key = Some(key);
            }

            fn environment(&self) -> $crate::Environment {
                self.core.environment
            }

            fn set_environment(&mut self, environment: $crate::Environment) {
                self.core.environment = environment;
            }

            fn as_localizable_mut(
                &mut self,
            ) -> Option<&mut dyn $crate::components::Localizable> {
                Some(self)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl $crate::components::Localizable for $component {
            fn localization_parameters(
                &self,
            ) -> Option<&$crate::config::LocalizationParameters> {
                self.localization_parameters.as_ref()
            }

            fn set_localization_parameters(
                &mut self,
                parameters: $crate::config::LocalizationParameters,
            ) {
                self.localization_parameters = Some(parameters);
            }
        }
    };
}

pub(crate) use impl_payment_component;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::{GenericPaymentMethod, PaymentMethod};

    fn placeholder() -> EmptyComponent {
        EmptyComponent::new(PaymentMethod::Other(GenericPaymentMethod {
            type_tag: "voucher".into(),
            name: "Voucher".into(),
        }))
    }

    #[test]
    fn test_context_stamping_round_trip() {
        let mut component = placeholder();
        assert_eq!(component.client_key(), None);
        assert_eq!(component.environment(), Environment::Live);

        component.set_client_key("live_abc".into());
        component.set_environment(Environment::Test);
        assert_eq!(component.client_key(), Some("live_abc"));
        assert_eq!(component.environment(), Environment::Test);
    }

    #[test]
    fn test_placeholder_is_not_localizable() {
        let mut component = placeholder();
        assert!(component.as_localizable_mut().is_none());
    }
}
