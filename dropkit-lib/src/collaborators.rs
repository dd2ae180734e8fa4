//! Narrow interfaces to external collaborators.
//!
//! Assembly itself does no I/O. Everything that does — key fetching,
//! platform SDK probing — sits behind these traits and is injected by the
//! host application. Diagnostics go through `tracing` events and need no
//! trait of their own.

use async_trait::async_trait;

use crate::Result;

/// Provides the card encryption public key for client-key flows.
///
/// Called when the shopper submits card details, never during component
/// assembly; a component built with a client key defers key fetching until
/// interaction time.
#[async_trait]
pub trait CardPublicKeyProvider: Send + Sync {
    /// Fetch the public key to encrypt card details with.
    async fn fetch_public_key(&self) -> Result<String>;
}

/// The dynamically loadable chat-application payment SDK.
///
/// Absent on devices without the chat application; the factory treats a
/// missing probe the same as a failed device-support check.
pub trait ChatAppSdk: Send + Sync {
    /// Whether the SDK can complete payments on this device.
    fn is_device_supported(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DropkitError;

    struct StaticKeyProvider {
        key: Option<String>,
    }

    #[async_trait]
    impl CardPublicKeyProvider for StaticKeyProvider {
        async fn fetch_public_key(&self) -> Result<String> {
            self.key
                .clone()
                .ok_or_else(|| DropkitError::MissingCredential {
                    method: "scheme".into(),
                })
        }
    }

    #[tokio::test]
    async fn test_key_provider_contract() {
        let provider = StaticKeyProvider {
            key: Some("10001|B243E".into()),
        };
        assert_eq!(provider.fetch_public_key().await.unwrap(), "10001|B243E");

        let failing = StaticKeyProvider { key: None };
        assert!(failing.fetch_public_key().await.is_err());
    }
}
