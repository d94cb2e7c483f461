//! Null assertion encoding
//!
//! A null assertion carries no security guarantee. It binds user data by hash
//! so that a verifier can at least detect an assertion replayed against the
//! wrong handshake transcript.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use warden_core::{AssertionDescription, AuthorityError, EnclaveIdentityType};

/// Authority type shared by the null generator and verifier
pub const NULL_AUTHORITY_TYPE: &str = "Any";

/// Description naming the null authorities
pub fn null_description() -> AssertionDescription {
    AssertionDescription::new(EnclaveIdentityType::NullIdentity, NULL_AUTHORITY_TYPE)
}

/// Body of a null assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullAssertion {
    /// Opaque information supplied through the generator's configuration
    pub additional_information: Vec<u8>,
    /// Hex-encoded SHA-256 of the user data the assertion is bound to
    pub user_data_hash: String,
}

impl NullAssertion {
    /// Build an assertion bound to `user_data`
    pub fn new(additional_information: Vec<u8>, user_data: &[u8]) -> Self {
        Self {
            additional_information,
            user_data_hash: hash_user_data(user_data),
        }
    }

    /// Serialize for transport
    pub fn encode(&self) -> Result<Vec<u8>, AuthorityError> {
        serde_json::to_vec(self).map_err(|e| AuthorityError::internal(e.to_string()))
    }

    /// Parse an assertion received from a peer
    pub fn decode(bytes: &[u8]) -> Result<Self, AuthorityError> {
        serde_json::from_slice(bytes)
            .map_err(|e| AuthorityError::verification(format!("Malformed null assertion: {e}")))
    }

    /// Whether this assertion is bound to `user_data`
    pub fn is_bound_to(&self, user_data: &[u8]) -> bool {
        self.user_data_hash == hash_user_data(user_data)
    }
}

fn hash_user_data(user_data: &[u8]) -> String {
    hex::encode(Sha256::digest(user_data))
}
