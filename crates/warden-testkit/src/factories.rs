//! Factories for registries and configuration records

use std::sync::Arc;

use warden_core::{AuthorityConfig, EnclaveIdentityType};
use warden_registry::AuthorityRegistries;

use crate::authority::FakeAuthority;

/// Shared fake authority that accepts every configuration
pub fn fake(identity_type: EnclaveIdentityType, authority_type: &str) -> Arc<FakeAuthority> {
    Arc::new(FakeAuthority::new(identity_type, authority_type))
}

/// Configuration record addressed to `(identity_type, authority_type)`
pub fn authority_config(
    identity_type: EnclaveIdentityType,
    authority_type: &str,
    config: &[u8],
) -> AuthorityConfig {
    AuthorityConfig::new(identity_type, authority_type, config.to_vec())
}

/// Registries holding the given fakes, in order
///
/// Panics if two fakes of the same role share a description.
pub fn registries(
    generators: &[Arc<FakeAuthority>],
    verifiers: &[Arc<FakeAuthority>],
) -> AuthorityRegistries {
    let mut builder = AuthorityRegistries::builder();
    for generator in generators {
        builder.generator(generator.clone()).unwrap();
    }
    for verifier in verifiers {
        builder.verifier(verifier.clone()).unwrap();
    }
    builder.build()
}

/// Every fake in `fakes` received at least one `try_initialize` call
pub fn all_attempted(fakes: &[Arc<FakeAuthority>]) -> bool {
    fakes.iter().all(|fake| fake.attempt_count() > 0)
}
