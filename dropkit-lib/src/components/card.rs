//! Card-family components.

use super::{impl_payment_component, ComponentCore};
use crate::config::LocalizationParameters;
use crate::credentials::CredentialSource;
use crate::methods::PaymentMethod;
use crate::style::FormComponentStyle;

/// Card entry form component; also serves stored cards.
///
/// Requires a resolved credential: either the client key or the legacy
/// public key. Display toggles default to the values of
/// [`CardConfiguration`](crate::config::CardConfiguration).
#[derive(Clone, Debug)]
pub struct CardComponent {
    payment_method: PaymentMethod,
    credential: CredentialSource,
    style: FormComponentStyle,
    core: ComponentCore,
    localization_parameters: Option<LocalizationParameters>,
    /// Whether the component renders its own large title.
    pub shows_large_title: bool,
    /// Whether the form asks for the cardholder name.
    pub shows_holder_name_field: bool,
    /// Whether the form offers to store the card.
    pub shows_store_payment_method_field: bool,
    /// Whether the form asks for the security code.
    pub shows_security_code_field: bool,
}

impl CardComponent {
    /// Create a card component.
    ///
    /// `credential` must be a configured source; the factory never passes
    /// `Unconfigured` here.
    pub fn new(
        payment_method: PaymentMethod,
        credential: CredentialSource,
        style: FormComponentStyle,
    ) -> Self {
        Self {
            payment_method,
            credential,
            style,
            core: ComponentCore::default(),
            localization_parameters: None,
            shows_large_title: true,
            shows_holder_name_field: false,
            shows_store_payment_method_field: true,
            shows_security_code_field: true,
        }
    }

    /// The credential this component encrypts with.
    pub fn credential(&self) -> &CredentialSource {
        &self.credential
    }

    /// The style forwarded to the rendering layer.
    pub fn style(&self) -> &FormComponentStyle {
        &self.style
    }
}

impl_payment_component!(CardComponent, localizable);

/// Region-specific bank card component.
///
/// Same credential requirement as [`CardComponent`], but the form never
/// asks for a security code, so only the holder-name and store toggles
/// apply.
#[derive(Clone, Debug)]
pub struct BankCardComponent {
    payment_method: PaymentMethod,
    credential: CredentialSource,
    style: FormComponentStyle,
    core: ComponentCore,
    localization_parameters: Option<LocalizationParameters>,
    /// Whether the component renders its own large title.
    pub shows_large_title: bool,
    /// Whether the form asks for the cardholder name.
    pub shows_holder_name_field: bool,
    /// Whether the form offers to store the card.
    pub shows_store_payment_method_field: bool,
}

impl BankCardComponent {
    /// Create a bank card component.
    pub fn new(
        payment_method: PaymentMethod,
        credential: CredentialSource,
        style: FormComponentStyle,
    ) -> Self {
        Self {
            payment_method,
            credential,
            style,
            core: ComponentCore::default(),
            localization_parameters: None,
            shows_large_title: true,
            shows_holder_name_field: false,
            shows_store_payment_method_field: true,
        }
    }

    /// The credential this component encrypts with.
    pub fn credential(&self) -> &CredentialSource {
        &self.credential
    }

    /// The style forwarded to the rendering layer.
    pub fn style(&self) -> &FormComponentStyle {
        &self.style
    }
}

impl_payment_component!(BankCardComponent, localizable);
