//! Drop-in component orchestration.

use std::sync::{Arc, OnceLock};

use crate::collaborators::ChatAppSdk;
use crate::config::Configuration;
use crate::factory::ComponentFactory;
use crate::methods::PaymentMethods;
use crate::sections::{partition, SectionedComponents};
use crate::style::DropInStyle;
use crate::{Environment, Payment};

/// Owns the drop-in's inputs and drives the assembly pipeline once.
///
/// State is immutable after construction apart from the environment, which
/// may be set before the first [`components`](ComponentManager::components)
/// access. Assembly runs at most once per instance; the result is memoized
/// behind a one-time-initialization guard and is safe against concurrent
/// first access.
pub struct ComponentManager {
    payment_methods: PaymentMethods,
    payment: Option<Payment>,
    configuration: Configuration,
    style: DropInStyle,
    environment: Environment,
    chat_sdk: Option<Arc<dyn ChatAppSdk>>,
    components: OnceLock<SectionedComponents>,
}

impl ComponentManager {
    /// Create a manager for one drop-in session.
    pub fn new(
        payment_methods: PaymentMethods,
        payment: Option<Payment>,
        configuration: Configuration,
        style: DropInStyle,
    ) -> Self {
        Self {
            payment_methods,
            payment,
            configuration,
            style,
            environment: Environment::default(),
            chat_sdk: None,
            components: OnceLock::new(),
        }
    }

    /// Inject the chat-application SDK probe.
    pub fn with_chat_sdk(mut self, sdk: Arc<dyn ChatAppSdk>) -> Self {
        self.chat_sdk = Some(sdk);
        self
    }

    /// The environment components will be stamped with.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Set the network environment.
    ///
    /// # Caveat
    ///
    /// Must happen before the first [`components`](ComponentManager::components)
    /// call. Once the sections are memoized, later environment changes have
    /// no effect on them.
    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    /// The assembled components, built on first access and memoized.
    ///
    /// Filters stored instruments by the shopper-present capability, builds
    /// a component per method, and drops everything unbuildable. Never
    /// fails; an unbuildable method only shortens the result.
    pub fn components(&self) -> &SectionedComponents {
        self.components.get_or_init(|| {
            let factory = ComponentFactory::new(
                &self.configuration,
                &self.style,
                self.payment.as_ref(),
                self.environment,
            );
            let factory = match self.chat_sdk.as_deref() {
                Some(sdk) => factory.with_chat_sdk(sdk),
                None => factory,
            };
            partition(
                &self.payment_methods.stored,
                &self.payment_methods.regular,
                |method| factory.build(method),
            )
        })
    }
}
