//! Encryption credential resolution.
//!
//! Card-family components need a credential to encrypt card details before
//! submission. Two kinds exist: the client key and the older directly
//! configured public key. Resolution order is fixed: the client key always
//! wins when both are present.
//!
//! `Unconfigured` is a valid outcome, not an error; the factory turns it
//! into "no component" plus a diagnostic naming the affected method type.

use crate::config::Configuration;

/// The credential a component will encrypt with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// Use the client key; the encryption key is fetched at interaction time.
    ClientKey(String),
    /// Use the directly configured legacy public key.
    LegacyPublicKey(String),
    /// Neither credential is configured.
    Unconfigured,
}

impl CredentialSource {
    /// Resolve the credential to use. Client key takes precedence.
    pub fn resolve(client_key: Option<&str>, legacy_public_key: Option<&str>) -> Self {
        if let Some(key) = client_key {
            return Self::ClientKey(key.to_owned());
        }
        if let Some(key) = legacy_public_key {
            return Self::LegacyPublicKey(key.to_owned());
        }
        Self::Unconfigured
    }

    /// Resolve from a full configuration record.
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self::resolve(
            configuration.client_key.as_deref(),
            configuration.legacy_public_key.as_deref(),
        )
    }

    /// Whether a usable credential was found.
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::Unconfigured)
    }

    /// The raw key material, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::ClientKey(key) | Self::LegacyPublicKey(key) => Some(key),
            Self::Unconfigured => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_key_takes_precedence() {
        let source = CredentialSource::resolve(Some("client"), Some("public"));
        assert_eq!(source, CredentialSource::ClientKey("client".into()));
        assert_eq!(source.key(), Some("client"));
    }

    #[test]
    fn test_falls_back_to_legacy_public_key() {
        let source = CredentialSource::resolve(None, Some("public"));
        assert_eq!(source, CredentialSource::LegacyPublicKey("public".into()));
        assert!(source.is_configured());
    }

    #[test]
    fn test_unconfigured_is_a_value() {
        let source = CredentialSource::resolve(None, None);
        assert_eq!(source, CredentialSource::Unconfigured);
        assert!(!source.is_configured());
        assert_eq!(source.key(), None);
    }
}
