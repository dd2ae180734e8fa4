//! Issuer selection component for bank redirect methods.

use super::{impl_payment_component, ComponentCore};
use crate::config::LocalizationParameters;
use crate::methods::PaymentMethod;
use crate::style::ListComponentStyle;

/// Lets the shopper pick their bank from the method's issuer list.
///
/// Always buildable; the redirect flow needs no credential at assembly
/// time.
#[derive(Clone, Debug)]
pub struct IssuerListComponent {
    payment_method: PaymentMethod,
    style: ListComponentStyle,
    core: ComponentCore,
    localization_parameters: Option<LocalizationParameters>,
}

impl IssuerListComponent {
    /// Create an issuer list component.
    pub fn new(payment_method: PaymentMethod, style: ListComponentStyle) -> Self {
        Self {
            payment_method,
            style,
            core: ComponentCore::default(),
            localization_parameters: None,
        }
    }

    /// The style forwarded to the rendering layer.
    pub fn style(&self) -> &ListComponentStyle {
        &self.style
    }
}

impl_payment_component!(IssuerListComponent, localizable);
