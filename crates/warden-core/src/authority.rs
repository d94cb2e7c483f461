//! Enclave assertion authorities
//!
//! Authorities are long-lived, process-wide trust components addressed by an
//! (identity type, authority type) pair. Two families share the
//! [`EnclaveAssertionAuthority`] contract: [`AssertionGenerator`]s produce
//! assertions about the local enclave and [`AssertionVerifier`]s check
//! assertions produced by peers.
//!
//! # Initialization contract
//!
//! [`EnclaveAssertionAuthority::try_initialize`] must be:
//! - idempotent: once it has succeeded, every later call succeeds and does nothing,
//!   whatever configuration it is given
//! - retriable: a failed call leaves the authority uninitialized
//! - atomic: concurrent calls never both run the underlying initialization
//!
//! [`crate::latch::InitLatch`] provides all three.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::assertion::{Assertion, AssertionOffer, AssertionRequest};
use crate::identity::{AssertionDescription, EnclaveIdentity, EnclaveIdentityType};

/// Key used to look an authority up in a registry
///
/// Derived as `<IDENTITY_TYPE_NAME>#<authority_type>`. Identity type names
/// never contain `#`, so distinct pairs never map to the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorityId(String);

impl AuthorityId {
    /// Separator between identity type name and authority type
    pub const SEPARATOR: char = '#';

    /// Derive the identifier for an (identity type, authority type) pair
    pub fn derive(
        identity_type: EnclaveIdentityType,
        authority_type: &str,
    ) -> Result<Self, IdentifierError> {
        if identity_type == EnclaveIdentityType::UnknownIdentity {
            return Err(IdentifierError::UnsupportedIdentityType { identity_type });
        }
        if authority_type.is_empty() {
            return Err(IdentifierError::EmptyAuthorityType { identity_type });
        }
        if authority_type.chars().any(char::is_control) {
            return Err(IdentifierError::MalformedAuthorityType {
                authority_type: authority_type.to_string(),
            });
        }

        Ok(Self(format!(
            "{}{}{}",
            identity_type.name(),
            Self::SEPARATOR,
            authority_type
        )))
    }

    /// Derive the identifier named by a description
    pub fn for_description(description: &AssertionDescription) -> Result<Self, IdentifierError> {
        Self::derive(description.identity_type, &description.authority_type)
    }

    /// Borrow the identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AuthorityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Failure to derive an [`AuthorityId`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The identity type cannot name any authority
    #[error("Unsupported identity type: {identity_type}")]
    UnsupportedIdentityType {
        /// Offending identity type
        identity_type: EnclaveIdentityType,
    },

    /// The authority type is empty
    #[error("Empty authority type for identity type {identity_type}")]
    EmptyAuthorityType {
        /// Identity type the empty authority type was paired with
        identity_type: EnclaveIdentityType,
    },

    /// The authority type contains characters that cannot appear in an identifier
    #[error("Malformed authority type: {authority_type:?}")]
    MalformedAuthorityType {
        /// Offending authority type
        authority_type: String,
    },
}

/// Failure reported by an authority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AuthorityError {
    /// Operation requires an initialized authority
    #[error("Authority {authority} is not initialized")]
    NotInitialized {
        /// Identifier of the authority
        authority: String,
    },

    /// The configuration payload was rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Why the payload was rejected
        message: String,
    },

    /// A request or assertion argument was rejected
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Why the argument was rejected
        message: String,
    },

    /// A resource the authority depends on is unavailable
    #[error("Unavailable: {message}")]
    Unavailable {
        /// Which resource is unavailable
        message: String,
    },

    /// An assertion failed verification
    #[error("Verification failed: {message}")]
    Verification {
        /// Why verification failed
        message: String,
    },

    /// Internal authority error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl AuthorityError {
    /// Create a not-initialized error for `authority`
    pub fn not_initialized(authority: impl fmt::Display) -> Self {
        Self::NotInitialized {
            authority: authority.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unavailable resource error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a verification error
    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Capability shared by assertion generators and verifiers
pub trait EnclaveAssertionAuthority: Send + Sync {
    /// Identity family this authority handles
    fn identity_type(&self) -> EnclaveIdentityType;

    /// Authority type within the identity family
    fn authority_type(&self) -> &str;

    /// Description naming this authority
    fn description(&self) -> AssertionDescription {
        AssertionDescription::new(self.identity_type(), self.authority_type())
    }

    /// Registry key for this authority
    fn authority_id(&self) -> Result<AuthorityId, IdentifierError> {
        AuthorityId::derive(self.identity_type(), self.authority_type())
    }

    /// Whether a previous [`try_initialize`](Self::try_initialize) succeeded
    fn is_initialized(&self) -> bool;

    /// Initialize with an authority-specific configuration payload.
    ///
    /// See the module docs for the idempotency contract. An empty payload
    /// requests the authority's default configuration.
    fn try_initialize(&self, config: &[u8]) -> Result<(), AuthorityError>;
}

/// Authority that produces assertions about the local enclave
pub trait AssertionGenerator: EnclaveAssertionAuthority {
    /// Advertise the assertion this generator can produce
    fn create_assertion_offer(&self) -> Result<AssertionOffer, AuthorityError>;

    /// Whether this generator can satisfy `request`
    fn can_generate(&self, request: &AssertionRequest) -> Result<bool, AuthorityError>;

    /// Produce an assertion bound to `user_data` that satisfies `request`
    fn generate(
        &self,
        user_data: &[u8],
        request: &AssertionRequest,
    ) -> Result<Assertion, AuthorityError>;
}

/// Authority that checks assertions produced by peers
pub trait AssertionVerifier: EnclaveAssertionAuthority {
    /// Describe the assertion this verifier accepts
    fn create_assertion_request(&self) -> Result<AssertionRequest, AuthorityError>;

    /// Whether this verifier can check assertions matching `offer`
    fn can_verify(&self, offer: &AssertionOffer) -> Result<bool, AuthorityError>;

    /// Verify `assertion` against `user_data` and extract the peer identity
    fn verify(
        &self,
        user_data: &[u8],
        assertion: &Assertion,
    ) -> Result<EnclaveIdentity, AuthorityError>;
}

/// Shared generator reference
pub type GeneratorRef = Arc<dyn AssertionGenerator>;

/// Shared verifier reference
pub type VerifierRef = Arc<dyn AssertionVerifier>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn derive_joins_identity_name_and_authority_type() {
        let id = AuthorityId::derive(EnclaveIdentityType::NullIdentity, "Any").unwrap();
        assert_eq!(id.as_str(), "NULL_IDENTITY#Any");
        assert_eq!(id.to_string(), "NULL_IDENTITY#Any");
    }

    #[test]
    fn derive_is_deterministic() {
        let a = AuthorityId::derive(EnclaveIdentityType::CodeIdentity, "SGX Local").unwrap();
        let b = AuthorityId::for_description(&AssertionDescription::new(
            EnclaveIdentityType::CodeIdentity,
            "SGX Local",
        ))
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_pairs_do_not_collide() {
        let a = AuthorityId::derive(EnclaveIdentityType::CodeIdentity, "x").unwrap();
        let b = AuthorityId::derive(EnclaveIdentityType::CertIdentity, "x").unwrap();
        let c = AuthorityId::derive(EnclaveIdentityType::CodeIdentity, "x#y").unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn derive_rejects_unsupported_and_malformed_pairs() {
        assert_matches!(
            AuthorityId::derive(EnclaveIdentityType::UnknownIdentity, "Any"),
            Err(IdentifierError::UnsupportedIdentityType { .. })
        );
        assert_matches!(
            AuthorityId::derive(EnclaveIdentityType::NullIdentity, ""),
            Err(IdentifierError::EmptyAuthorityType { .. })
        );
        assert_matches!(
            AuthorityId::derive(EnclaveIdentityType::NullIdentity, "bad\ntype"),
            Err(IdentifierError::MalformedAuthorityType { .. })
        );
    }

    #[test]
    fn authority_id_serializes_transparently() {
        let id = AuthorityId::derive(EnclaveIdentityType::CertIdentity, "X.509").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"CERT_IDENTITY#X.509\""
        );
    }
}
