//! Error types for component assembly.
//!
//! Assembly failures never cross the orchestrator as `Err`: at the factory
//! boundary every error below resolves to "no component" plus a non-fatal
//! diagnostic. The error type still exists so diagnostics carry structure
//! and so FFI layers can map failures to stable codes.

use thiserror::Error;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DropkitErrorCode {
    /// No usable encryption credential configured
    MissingCredential = 1000,
    /// A required configuration field is absent
    MissingRequiredField = 1001,
    /// Platform SDK absent or device unsupported
    UnsupportedPlatformCapability = 2000,
    /// A component constructor rejected its inputs
    ConstructionFailure = 3000,
    /// Serialization error
    Serialization = 5000,
}

/// Error type for component assembly.
#[derive(Debug, Clone, Error)]
pub enum DropkitError {
    /// No encryption credential is available for a method that needs one.
    #[error("cannot build {method}: client key is not configured")]
    MissingCredential {
        /// Payment method type that could not be built
        method: String,
    },

    /// A required configuration field is missing.
    #[error("cannot build {method}: missing {field}")]
    MissingRequiredField {
        /// Payment method type that could not be built
        method: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// The platform cannot support this payment method.
    #[error("cannot build {method}: {reason}")]
    UnsupportedPlatformCapability {
        /// Payment method type that could not be built
        method: String,
        /// Why the platform check failed
        reason: &'static str,
    },

    /// A component constructor rejected its inputs.
    #[error("failed to construct {method} component: {reason}")]
    ConstructionFailure {
        /// Payment method type that could not be built
        method: String,
        /// Underlying failure description
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DropkitError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> DropkitErrorCode {
        match self {
            Self::MissingCredential { .. } => DropkitErrorCode::MissingCredential,
            Self::MissingRequiredField { .. } => DropkitErrorCode::MissingRequiredField,
            Self::UnsupportedPlatformCapability { .. } => {
                DropkitErrorCode::UnsupportedPlatformCapability
            }
            Self::ConstructionFailure { .. } => DropkitErrorCode::ConstructionFailure,
            Self::Serialization(_) => DropkitErrorCode::Serialization,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for DropkitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
