//! Component for saved non-card instruments.

use super::{impl_payment_component, ComponentCore};
use crate::config::LocalizationParameters;
use crate::methods::PaymentMethod;

/// Wraps a saved instrument for one-tap reuse.
///
/// Always buildable: submission reuses the stored token, so no credential
/// is required at assembly time.
#[derive(Clone, Debug)]
pub struct StoredInstrumentComponent {
    payment_method: PaymentMethod,
    core: ComponentCore,
    localization_parameters: Option<LocalizationParameters>,
}

impl StoredInstrumentComponent {
    /// Create a stored instrument component.
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            payment_method,
            core: ComponentCore::default(),
            localization_parameters: None,
        }
    }
}

impl_payment_component!(StoredInstrumentComponent, localizable);
