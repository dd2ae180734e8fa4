//! Inert placeholder component.

use super::{impl_payment_component, ComponentCore};
use crate::methods::PaymentMethod;

/// A component with no form of its own.
///
/// Used for methods whose real flow lives in an external collaborator
/// (chat-application payments) and for unrecognized method types, so the
/// list degrades to "nothing actionable" instead of erroring.
#[derive(Clone, Debug)]
pub struct EmptyComponent {
    payment_method: PaymentMethod,
    core: ComponentCore,
}

impl EmptyComponent {
    /// Create a placeholder component.
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            payment_method,
            core: ComponentCore::default(),
        }
    }
}

impl_payment_component!(EmptyComponent);
