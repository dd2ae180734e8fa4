//! Simple form components: SEPA, Qiwi and MB WAY.

use super::{impl_payment_component, ComponentCore};
use crate::config::LocalizationParameters;
use crate::methods::PaymentMethod;
use crate::style::FormComponentStyle;

/// SEPA direct debit form (IBAN and account holder entry).
///
/// Always buildable; mandate data is submitted in plain form.
#[derive(Clone, Debug)]
pub struct SepaDirectDebitComponent {
    payment_method: PaymentMethod,
    style: FormComponentStyle,
    core: ComponentCore,
    localization_parameters: Option<LocalizationParameters>,
    /// Whether the component renders its own large title.
    pub shows_large_title: bool,
}

impl SepaDirectDebitComponent {
    /// Create a SEPA direct debit component.
    pub fn new(payment_method: PaymentMethod, style: FormComponentStyle) -> Self {
        Self {
            payment_method,
            style,
            core: ComponentCore::default(),
            localization_parameters: None,
            shows_large_title: true,
        }
    }

    /// The style forwarded to the rendering layer.
    pub fn style(&self) -> &FormComponentStyle {
        &self.style
    }
}

impl_payment_component!(SepaDirectDebitComponent, localizable);

/// Qiwi wallet form (phone number entry).
///
/// Always buildable.
#[derive(Clone, Debug)]
pub struct QiwiWalletComponent {
    payment_method: PaymentMethod,
    style: FormComponentStyle,
    core: ComponentCore,
    localization_parameters: Option<LocalizationParameters>,
    /// Whether the component renders its own large title.
    pub shows_large_title: bool,
}

impl QiwiWalletComponent {
    /// Create a Qiwi wallet component.
    pub fn new(payment_method: PaymentMethod, style: FormComponentStyle) -> Self {
        Self {
            payment_method,
            style,
            core: ComponentCore::default(),
            localization_parameters: None,
            shows_large_title: true,
        }
    }

    /// The style forwarded to the rendering layer.
    pub fn style(&self) -> &FormComponentStyle {
        &self.style
    }
}

impl_payment_component!(QiwiWalletComponent, localizable);

/// MB WAY form (phone number entry).
///
/// Submission goes through the tokenization backend, which accepts the
/// client key only; the factory enforces that before construction.
#[derive(Clone, Debug)]
pub struct MbWayComponent {
    payment_method: PaymentMethod,
    style: FormComponentStyle,
    core: ComponentCore,
    localization_parameters: Option<LocalizationParameters>,
    /// Whether the component renders its own large title.
    pub shows_large_title: bool,
}

impl MbWayComponent {
    /// Create an MB WAY component.
    pub fn new(payment_method: PaymentMethod, style: FormComponentStyle) -> Self {
        Self {
            payment_method,
            style,
            core: ComponentCore::default(),
            localization_parameters: None,
            shows_large_title: true,
        }
    }

    /// The style forwarded to the rendering layer.
    pub fn style(&self) -> &FormComponentStyle {
        &self.style
    }
}

impl_payment_component!(MbWayComponent, localizable);
