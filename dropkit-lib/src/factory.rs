//! Per-method component construction rules.
//!
//! The factory is the decision engine of the drop-in: one explicit match
//! over the payment-method tags, one construction rule per arm, and a
//! default arm that degrades unknown types to an inert placeholder.
//! Failures never escape as errors; every unbuildable method resolves to
//! `None` plus a `tracing` diagnostic, and the rendered list simply gets
//! shorter.
//!
//! Every successfully built component is stamped, before handoff, with the
//! client key (when configured), the network environment, and — for
//! components with the localization capability — the locale overrides.

use crate::collaborators::ChatAppSdk;
use crate::components::{
    ApplePayComponent, BankCardComponent, CardComponent, EmptyComponent, IssuerListComponent,
    MbWayComponent, PaymentComponent, QiwiWalletComponent, SepaDirectDebitComponent,
    StoredInstrumentComponent,
};
use crate::config::Configuration;
use crate::credentials::CredentialSource;
use crate::methods::PaymentMethod;
use crate::style::DropInStyle;
use crate::{DropkitError, Environment, Payment};

/// Builds components for individual payment methods.
///
/// Borrows the manager's configuration, style and payment context for the
/// duration of one assembly pass.
pub struct ComponentFactory<'a> {
    configuration: &'a Configuration,
    style: &'a DropInStyle,
    payment: Option<&'a Payment>,
    environment: Environment,
    chat_sdk: Option<&'a dyn ChatAppSdk>,
}

impl<'a> ComponentFactory<'a> {
    /// Create a factory for one assembly pass.
    pub fn new(
        configuration: &'a Configuration,
        style: &'a DropInStyle,
        payment: Option<&'a Payment>,
        environment: Environment,
    ) -> Self {
        Self {
            configuration,
            style,
            payment,
            environment,
            chat_sdk: None,
        }
    }

    /// Inject the chat-application SDK probe.
    pub fn with_chat_sdk(mut self, sdk: &'a dyn ChatAppSdk) -> Self {
        self.chat_sdk = Some(sdk);
        self
    }

    /// Build the component for a payment method.
    ///
    /// Returns `None` when the method cannot be built with the current
    /// configuration; the reason is emitted as a diagnostic.
    pub fn build(&self, method: &PaymentMethod) -> Option<Box<dyn PaymentComponent>> {
        let component: Option<Box<dyn PaymentComponent>> = match method {
            PaymentMethod::StoredCard(_) | PaymentMethod::Card(_) => {
                self.create_card_component(method)
            }
            PaymentMethod::BankCard(_) => self.create_bank_card_component(method),
            PaymentMethod::StoredInstrument(_) => {
                Some(Box::new(StoredInstrumentComponent::new(method.clone())))
            }
            PaymentMethod::IssuerList(_) => Some(Box::new(IssuerListComponent::new(
                method.clone(),
                self.style.list.clone(),
            ))),
            PaymentMethod::BankTransfer(_) => self.create_sepa_component(method),
            PaymentMethod::ApplePay(_) => self.create_apple_pay_component(method),
            PaymentMethod::QiwiWallet(_) => self.create_qiwi_component(method),
            PaymentMethod::MbWay(_) => self.create_mbway_component(method),
            PaymentMethod::ChatPay(_) => self.create_chat_pay_component(method),
            PaymentMethod::Other(_) => Some(Box::new(EmptyComponent::new(method.clone()))),
        };

        component.map(|component| self.stamp(component))
    }

    /// Stamp credential/environment/localization context onto a freshly
    /// built component. The only mutation the factory ever performs.
    fn stamp(&self, mut component: Box<dyn PaymentComponent>) -> Box<dyn PaymentComponent> {
        if let Some(key) = &self.configuration.client_key {
            component.set_client_key(key.clone());
        }
        component.set_environment(self.environment);
        if let Some(parameters) = &self.configuration.localization_parameters {
            if let Some(localizable) = component.as_localizable_mut() {
                localizable.set_localization_parameters(parameters.clone());
            }
        }
        component
    }

    fn create_card_component(&self, method: &PaymentMethod) -> Option<Box<dyn PaymentComponent>> {
        let credential = CredentialSource::from_configuration(self.configuration);
        if !credential.is_configured() {
            self.report(&DropkitError::MissingCredential {
                method: method.type_tag().into(),
            });
            return None;
        }

        let card = &self.configuration.card;
        let mut component =
            CardComponent::new(method.clone(), credential, self.style.form.clone());
        component.shows_large_title = false;
        component.shows_holder_name_field = card.shows_holder_name_field;
        component.shows_store_payment_method_field = card.shows_store_payment_method_field;
        component.shows_security_code_field = card.shows_security_code_field;
        Some(Box::new(component))
    }

    fn create_bank_card_component(
        &self,
        method: &PaymentMethod,
    ) -> Option<Box<dyn PaymentComponent>> {
        let credential = CredentialSource::from_configuration(self.configuration);
        if !credential.is_configured() {
            self.report(&DropkitError::MissingCredential {
                method: method.type_tag().into(),
            });
            return None;
        }

        let card = &self.configuration.card;
        let mut component =
            BankCardComponent::new(method.clone(), credential, self.style.form.clone());
        component.shows_large_title = false;
        component.shows_holder_name_field = card.shows_holder_name_field;
        component.shows_store_payment_method_field = card.shows_store_payment_method_field;
        Some(Box::new(component))
    }

    fn create_sepa_component(&self, method: &PaymentMethod) -> Option<Box<dyn PaymentComponent>> {
        let mut component = SepaDirectDebitComponent::new(method.clone(), self.style.form.clone());
        component.shows_large_title = false;
        Some(Box::new(component))
    }

    fn create_apple_pay_component(
        &self,
        method: &PaymentMethod,
    ) -> Option<Box<dyn PaymentComponent>> {
        let wallet = &self.configuration.wallet;
        let Some(summary_items) = wallet.summary_items.clone() else {
            self.report(&DropkitError::MissingRequiredField {
                method: method.type_tag().into(),
                field: "summary items",
            });
            return None;
        };
        let Some(merchant_identifier) = wallet.merchant_identifier.clone() else {
            self.report(&DropkitError::MissingRequiredField {
                method: method.type_tag().into(),
                field: "merchant identifier",
            });
            return None;
        };
        let Some(payment) = self.payment else {
            self.report(&DropkitError::MissingRequiredField {
                method: method.type_tag().into(),
                field: "payment",
            });
            return None;
        };

        match ApplePayComponent::new(
            method.clone(),
            payment.clone(),
            merchant_identifier,
            summary_items,
            wallet.required_billing_contact_fields.clone(),
            wallet.required_shipping_contact_fields.clone(),
        ) {
            Ok(component) => Some(Box::new(component)),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    fn create_qiwi_component(&self, method: &PaymentMethod) -> Option<Box<dyn PaymentComponent>> {
        let mut component = QiwiWalletComponent::new(method.clone(), self.style.form.clone());
        component.shows_large_title = false;
        Some(Box::new(component))
    }

    fn create_mbway_component(&self, method: &PaymentMethod) -> Option<Box<dyn PaymentComponent>> {
        // Client key only: the legacy public key does not satisfy the MB WAY
        // tokenization backend, unlike the card flow.
        if self.configuration.client_key.is_none() {
            self.report(&DropkitError::MissingCredential {
                method: method.type_tag().into(),
            });
            return None;
        }
        let mut component = MbWayComponent::new(method.clone(), self.style.form.clone());
        component.shows_large_title = false;
        Some(Box::new(component))
    }

    fn create_chat_pay_component(
        &self,
        method: &PaymentMethod,
    ) -> Option<Box<dyn PaymentComponent>> {
        let Some(sdk) = self.chat_sdk else {
            self.report(&DropkitError::UnsupportedPlatformCapability {
                method: method.type_tag().into(),
                reason: "platform SDK is not available",
            });
            return None;
        };
        if !sdk.is_device_supported() {
            self.report(&DropkitError::UnsupportedPlatformCapability {
                method: method.type_tag().into(),
                reason: "device is not supported",
            });
            return None;
        }
        // Submission runs in the external SDK; the list entry is inert.
        Some(Box::new(EmptyComponent::new(method.clone())))
    }

    /// Fire-and-forget diagnostic emission; never blocks, never fails.
    fn report(&self, error: &DropkitError) {
        tracing::warn!(code = error.code() as i32, "{error}");
    }
}
