//! Authority configuration records
//!
//! In TOML a configuration file lists one table per authority:
//!
//! ```toml
//! [[authorities]]
//! identity_type = "NULL_IDENTITY"
//! authority_type = "Any"
//! config = "aGVsbG8="   # base64, optional
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::traits::{ConfigLoad, ConfigValidation};
use crate::authority::AuthorityId;
use crate::identity::{AssertionDescription, EnclaveIdentityType};
use crate::WardenError;

/// Configuration payload for one authority
///
/// The payload is opaque here; only the authority it is addressed to knows
/// how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorityConfig {
    /// Authority the payload is addressed to
    #[serde(flatten)]
    pub description: AssertionDescription,
    /// Authority-specific payload
    #[serde(default, with = "base64_bytes", skip_serializing_if = "Vec::is_empty")]
    pub config: Vec<u8>,
}

impl AuthorityConfig {
    /// Create a configuration record
    pub fn new(
        identity_type: EnclaveIdentityType,
        authority_type: impl Into<String>,
        config: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            description: AssertionDescription::new(identity_type, authority_type),
            config: config.into(),
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardenConfig {
    /// Per-authority configuration records, in initialization order
    #[serde(default)]
    pub authorities: Vec<AuthorityConfig>,
}

impl ConfigLoad for WardenConfig {
    fn from_toml_str(content: &str) -> Result<Self, WardenError> {
        toml::from_str(content)
            .map_err(|e| WardenError::from(e).with_context("Invalid warden config"))
    }
}

impl ConfigValidation for WardenConfig {
    /// Every record must name a derivable authority. Repeated records are
    /// allowed; only the first payload for a given authority can take effect,
    /// so conflicting repeats are reported as warnings.
    fn validate(&self) -> Result<(), WardenError> {
        let mut seen: HashMap<AuthorityId, usize> = HashMap::new();

        for (index, record) in self.authorities.iter().enumerate() {
            let id = AuthorityId::for_description(&record.description).map_err(|e| {
                WardenError::invalid(format!("authorities[{index}] ({}): {e}", record.description))
            })?;

            if let Some(&first) = seen.get(&id) {
                if self.authorities[first].config != record.config {
                    tracing::warn!(
                        authority_id = %id,
                        first_index = first,
                        index,
                        "Conflicting configs for the same authority; only the first can take effect"
                    );
                }
            } else {
                seen.insert(id, index);
            }
        }

        Ok(())
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
