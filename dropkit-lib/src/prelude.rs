//! Prelude module for convenient imports.
//!
//! Import everything with:
//!
//! ```rust,ignore
//! use dropkit_lib::prelude::*;
//! ```

// Core types
pub use crate::{Amount, Environment, Payment, Result};

// Error handling
pub use crate::errors::{DropkitError, DropkitErrorCode};

// Data model
pub use crate::methods::{PaymentMethod, PaymentMethods, ShopperInteraction};

// Configuration
pub use crate::config::{
    CardConfiguration, Configuration, LocalizationParameters, SummaryItem, WalletConfiguration,
};

// Styling
pub use crate::style::{DropInStyle, FormComponentStyle, ListComponentStyle};

// Credentials
pub use crate::credentials::CredentialSource;

// Components and assembly
pub use crate::components::{Localizable, PaymentComponent};
pub use crate::factory::ComponentFactory;
pub use crate::manager::ComponentManager;
pub use crate::sections::SectionedComponents;

// Collaborator seams
pub use crate::collaborators::{CardPublicKeyProvider, ChatAppSdk};
