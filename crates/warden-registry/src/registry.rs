//! Authority registries
//!
//! A registry maps [`AuthorityId`] to a shared authority instance. Registries
//! are assembled once with a [`RegistryBuilder`] and are immutable afterwards:
//! lookups and enumeration are the only operations, so a built registry can be
//! shared freely between threads.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use warden_core::{AuthorityId, EnclaveAssertionAuthority, IdentifierError};

use crate::role::{AuthorityRole, Generators, RoleKind, Verifiers};

/// Errors raised while assembling a registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two authorities of the same role derive the same identifier
    #[error("Duplicate {role} registered for {authority_id}")]
    DuplicateAuthority {
        /// Role of the registry
        role: RoleKind,
        /// Identifier registered twice
        authority_id: AuthorityId,
    },

    /// The authority's own description does not derive an identifier
    #[error("Cannot register {role}: {source}")]
    InvalidIdentifier {
        /// Role of the registry
        role: RoleKind,
        /// Derivation failure
        #[source]
        source: IdentifierError,
    },
}

/// Immutable mapping from authority identifier to authority, in registration order
pub struct AuthorityRegistry<R: AuthorityRole> {
    entries: IndexMap<AuthorityId, Arc<R::Authority>>,
}

/// Registry of assertion generators
pub type GeneratorRegistry = AuthorityRegistry<Generators>;

/// Registry of assertion verifiers
pub type VerifierRegistry = AuthorityRegistry<Verifiers>;

impl<R: AuthorityRole> AuthorityRegistry<R> {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Start assembling a registry
    pub fn builder() -> RegistryBuilder<R> {
        RegistryBuilder::new()
    }

    /// Look up an authority by identifier
    pub fn get(&self, id: &AuthorityId) -> Option<&Arc<R::Authority>> {
        self.entries.get(id)
    }

    /// Whether an authority is registered under `id`
    pub fn contains(&self, id: &AuthorityId) -> bool {
        self.entries.contains_key(id)
    }

    /// Enumerate every registered authority with its identifier
    pub fn iter(&self) -> impl Iterator<Item = (&AuthorityId, &Arc<R::Authority>)> {
        self.entries.iter()
    }

    /// Enumerate every registered authority
    pub fn authorities(&self) -> impl Iterator<Item = &Arc<R::Authority>> {
        self.entries.values()
    }

    /// Number of registered authorities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no authorities
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Role of this registry
    pub fn role(&self) -> RoleKind {
        R::KIND
    }
}

impl<R: AuthorityRole> Clone for AuthorityRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<R: AuthorityRole> Default for AuthorityRegistry<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: AuthorityRole> fmt::Debug for AuthorityRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorityRegistry")
            .field("role", &R::KIND)
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Append-only builder for an [`AuthorityRegistry`]
pub struct RegistryBuilder<R: AuthorityRole> {
    entries: IndexMap<AuthorityId, Arc<R::Authority>>,
}

impl<R: AuthorityRole> RegistryBuilder<R> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register an authority under the identifier its description derives
    pub fn register(&mut self, authority: Arc<R::Authority>) -> Result<&mut Self, RegistryError> {
        let authority_id = authority
            .authority_id()
            .map_err(|source| RegistryError::InvalidIdentifier {
                role: R::KIND,
                source,
            })?;

        if self.entries.contains_key(&authority_id) {
            return Err(RegistryError::DuplicateAuthority {
                role: R::KIND,
                authority_id,
            });
        }

        tracing::debug!(role = %R::KIND, %authority_id, "Registered authority");
        self.entries.insert(authority_id, authority);
        Ok(self)
    }

    /// Finish assembly
    pub fn build(self) -> AuthorityRegistry<R> {
        AuthorityRegistry {
            entries: self.entries,
        }
    }
}

impl<R: AuthorityRole> Default for RegistryBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
