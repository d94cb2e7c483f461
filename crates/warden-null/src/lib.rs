//! Warden Null - Null-Identity Assertion Authorities
//!
//! Built-in generator and verifier for `NULL_IDENTITY` / `"Any"`. Null
//! assertions prove nothing about the enclave; they exist so that two peers
//! without attestation support can still complete an assertion exchange.

#![forbid(unsafe_code)]

pub mod assertion;
pub mod generator;
pub mod verifier;

pub use assertion::{null_description, NullAssertion, NULL_AUTHORITY_TYPE};
pub use generator::NullAssertionGenerator;
pub use verifier::NullAssertionVerifier;

use std::sync::Arc;

use warden_registry::{AuthorityRegistries, RegistryError};

/// Registries holding every authority built into this workspace
pub fn builtin_registries() -> Result<AuthorityRegistries, RegistryError> {
    let mut builder = AuthorityRegistries::builder();
    builder
        .generator(Arc::new(NullAssertionGenerator::new()))?
        .verifier(Arc::new(NullAssertionVerifier::new()))?;
    Ok(builder.build())
}
