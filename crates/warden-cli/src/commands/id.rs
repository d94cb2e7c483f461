//! `warden id`

use anyhow::Result;

use warden_core::{AuthorityId, EnclaveIdentityType};

/// Derive the registry key for an authority
pub fn derive(identity_type: EnclaveIdentityType, authority_type: &str) -> Result<AuthorityId> {
    Ok(AuthorityId::derive(identity_type, authority_type)?)
}
