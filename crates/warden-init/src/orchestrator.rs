//! Authority initialization orchestrator
//!
//! One pass over the caller's configuration records initializes the matching
//! generator and verifier of each record; a second pass initializes every
//! registered authority with an empty configuration so that authorities no
//! record mentioned still come up. Authorities already initialized by the
//! first pass ignore the second (see the latch contract in
//! `warden_core::authority`).
//!
//! No failure stops a pass. Each one is logged and folded into a single
//! aggregate outcome.

use std::borrow::Borrow;

use warden_core::{AuthorityConfig, AuthorityId, EnclaveAssertionAuthority};
use warden_registry::{AuthorityRegistries, AuthorityRegistry, AuthorityRole};

use crate::errors::{InitFailure, InitializationError};

/// Configuration used for authorities no record addresses
const DEFAULT_CONFIG: &[u8] = b"";

/// Initialize every registered assertion generator and verifier.
///
/// Each record in `configs` is routed to the generator and the verifier
/// registered under the identifier its description derives. Afterwards every
/// registered authority is initialized with an empty configuration. Each
/// authority is initialized at most once across all calls, so once a call has
/// succeeded later calls have no effect.
///
/// Returns [`InitializationError`] if any of the following occurred:
/// - a record's description did not derive an authority identifier
/// - a record matched no generator, or no verifier
/// - an authority failed to initialize with its record or with the empty
///   configuration
///
/// Every record and every registered authority is visited regardless of
/// earlier failures. Details of each failure go to `tracing`, not to the
/// caller.
pub fn initialize_enclave_assertion_authorities<I>(
    configs: I,
    registries: &AuthorityRegistries,
) -> Result<(), InitializationError>
where
    I: IntoIterator,
    I::Item: Borrow<AuthorityConfig>,
{
    let mut ok = true;

    // Initialize assertion authorities with provided configs.
    for record in configs {
        let record = record.borrow();

        let authority_id = match AuthorityId::for_description(&record.description) {
            Ok(id) => id,
            Err(source) => {
                report(&InitFailure::IdentifierDerivation {
                    description: record.description.clone(),
                    source,
                });
                ok = false;
                continue;
            }
        };

        ok &= initialize_configured(&registries.generators, &authority_id, record);
        ok &= initialize_configured(&registries.verifiers, &authority_id, record);
    }

    // Initialize all remaining assertion authorities with an empty config.
    ok &= initialize_remaining(&registries.generators);
    ok &= initialize_remaining(&registries.verifiers);

    if ok {
        tracing::debug!(
            generators = registries.generators.len(),
            verifiers = registries.verifiers.len(),
            "Assertion authorities initialized"
        );
        Ok(())
    } else {
        Err(InitializationError)
    }
}

/// Route one record to the authority registered under `authority_id`
fn initialize_configured<R: AuthorityRole>(
    registry: &AuthorityRegistry<R>,
    authority_id: &AuthorityId,
    record: &AuthorityConfig,
) -> bool {
    match registry.get(authority_id) {
        Some(authority) => try_initialize::<R>(authority.as_ref(), authority_id, &record.config),
        None => {
            report(&InitFailure::UnmatchedAuthority {
                description: record.description.clone(),
                role: R::KIND,
            });
            false
        }
    }
}

/// Initialize every authority in `registry` with the default configuration
fn initialize_remaining<R: AuthorityRole>(registry: &AuthorityRegistry<R>) -> bool {
    let mut ok = true;
    for (authority_id, authority) in registry.iter() {
        ok &= try_initialize::<R>(authority.as_ref(), authority_id, DEFAULT_CONFIG);
    }
    ok
}

fn try_initialize<R: AuthorityRole>(
    authority: &R::Authority,
    authority_id: &AuthorityId,
    config: &[u8],
) -> bool {
    match authority.try_initialize(config) {
        Ok(()) => true,
        Err(source) => {
            report(&InitFailure::AuthorityInitialization {
                authority_id: authority_id.clone(),
                role: R::KIND,
                source,
            });
            false
        }
    }
}

/// Emit one failure to the diagnostic sink
fn report(failure: &InitFailure) {
    match failure {
        InitFailure::IdentifierDerivation {
            description,
            source,
        } => tracing::error!(
            identity_type = %description.identity_type,
            authority_type = %description.authority_type,
            error = %source,
            "Cannot derive authority id from config"
        ),
        InitFailure::UnmatchedAuthority { description, role } => tracing::warn!(
            identity_type = %description.identity_type,
            authority_type = %description.authority_type,
            %role,
            "Config does not match any known authority"
        ),
        InitFailure::AuthorityInitialization {
            authority_id,
            role,
            source,
        } => tracing::error!(
            %authority_id,
            %role,
            error = %source,
            "Failed to initialize authority"
        ),
    }
}
