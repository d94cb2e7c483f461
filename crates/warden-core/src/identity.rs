//! Enclave identity types
//!
//! An identity type names the family of identity an authority speaks for
//! (null, code, certificate). Paired with an authority type string it forms an
//! [`AssertionDescription`], which is how configuration records and assertions
//! name the authority they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WardenError;

/// Family of enclave identity an authority handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnclaveIdentityType {
    /// Placeholder for an unset identity type; no authority can be derived for it
    UnknownIdentity,
    /// Identity with no security properties, used for testing and bootstrapping
    NullIdentity,
    /// Identity derived from the code running in the enclave
    CodeIdentity,
    /// Identity backed by a certificate chain
    CertIdentity,
}

impl EnclaveIdentityType {
    /// All identity types, in declaration order
    pub const ALL: [EnclaveIdentityType; 4] = [
        Self::UnknownIdentity,
        Self::NullIdentity,
        Self::CodeIdentity,
        Self::CertIdentity,
    ];

    /// Canonical name, as used in configuration files and authority identifiers
    pub fn name(self) -> &'static str {
        match self {
            Self::UnknownIdentity => "UNKNOWN_IDENTITY",
            Self::NullIdentity => "NULL_IDENTITY",
            Self::CodeIdentity => "CODE_IDENTITY",
            Self::CertIdentity => "CERT_IDENTITY",
        }
    }
}

impl fmt::Display for EnclaveIdentityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnclaveIdentityType {
    type Err = WardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WardenError::invalid(format!("Unknown identity type: {s}")))
    }
}

/// Names an authority by identity type and authority type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssertionDescription {
    /// Identity family
    pub identity_type: EnclaveIdentityType,
    /// Authority-specific name within the identity family (e.g. `"Any"`)
    pub authority_type: String,
}

impl AssertionDescription {
    /// Create a new description
    pub fn new(identity_type: EnclaveIdentityType, authority_type: impl Into<String>) -> Self {
        Self {
            identity_type,
            authority_type: authority_type.into(),
        }
    }
}

impl fmt::Display for AssertionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "identity_type: {} authority_type: \"{}\"",
            self.identity_type,
            self.authority_type.escape_debug()
        )
    }
}

/// Identity extracted from a verified assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclaveIdentity {
    /// Which authority vouched for this identity
    pub description: AssertionDescription,
    /// Authority-specific encoding of the identity
    pub identity: Vec<u8>,
}
