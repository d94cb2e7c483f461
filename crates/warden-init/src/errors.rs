//! Initialization failures
//!
//! Individual failures are diagnostics only: the orchestrator logs them as
//! they happen and folds them into one [`InitializationError`] for the caller.

use warden_core::{AssertionDescription, AuthorityError, AuthorityId, IdentifierError};
use warden_registry::RoleKind;

/// Aggregate failure returned when any authority could not be brought up
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "One or more errors occurred while attempting to initialize assertion generators and \
     assertion verifiers"
)]
pub struct InitializationError;

/// A single non-fatal failure observed during an initialization pass
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitFailure {
    /// A configuration record did not derive an authority identifier
    #[error("Cannot derive authority id for {description}: {source}")]
    IdentifierDerivation {
        /// Description carried by the record
        description: AssertionDescription,
        /// Derivation failure
        #[source]
        source: IdentifierError,
    },

    /// A configuration record names no registered authority of a role
    #[error("Config for {description} does not match any known {role}")]
    UnmatchedAuthority {
        /// Description carried by the record
        description: AssertionDescription,
        /// Role whose registry had no entry
        role: RoleKind,
    },

    /// A registered authority rejected initialization
    #[error("Failed to initialize {role} {authority_id}: {source}")]
    AuthorityInitialization {
        /// Identifier of the authority
        authority_id: AuthorityId,
        /// Role of the authority
        role: RoleKind,
        /// Error reported by the authority
        #[source]
        source: AuthorityError,
    },
}
