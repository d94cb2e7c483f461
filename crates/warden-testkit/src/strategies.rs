//! Proptest strategies for configuration sequences

use proptest::prelude::*;

use warden_core::{AuthorityConfig, EnclaveIdentityType};

/// Authority types used by generated records; registries in property tests
/// register a subset of these so that some records match and some do not.
pub const AUTHORITY_TYPES: [&str; 4] = ["Any", "Local", "Remote", ""];

/// Any identity type, including the underivable unknown type
pub fn arb_identity_type() -> impl Strategy<Value = EnclaveIdentityType> {
    prop::sample::select(EnclaveIdentityType::ALL.to_vec())
}

/// One configuration record from the fixed vocabulary
pub fn arb_authority_config() -> impl Strategy<Value = AuthorityConfig> {
    (
        arb_identity_type(),
        prop::sample::select(AUTHORITY_TYPES.to_vec()),
        prop::collection::vec(any::<u8>(), 0..4),
    )
        .prop_map(|(identity_type, authority_type, config)| {
            AuthorityConfig::new(identity_type, authority_type, config)
        })
}

/// A sequence of records, possibly empty, possibly with repeats
pub fn arb_authority_configs() -> impl Strategy<Value = Vec<AuthorityConfig>> {
    prop::collection::vec(arb_authority_config(), 0..12)
}
