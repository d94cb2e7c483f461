//! Warden Registry - Generator and Verifier Registries
//!
//! Registries are explicit values built once at process start and passed by
//! reference to whatever needs them, instead of global maps filled by static
//! constructors. This keeps initialization order obvious and lets tests
//! inject registries full of controllable stand-ins.

#![forbid(unsafe_code)]

pub mod registry;
pub mod role;

pub use registry::{
    AuthorityRegistry, GeneratorRegistry, RegistryBuilder, RegistryError, VerifierRegistry,
};
pub use role::{AuthorityRole, Generators, RoleKind, Verifiers};

use warden_core::{GeneratorRef, VerifierRef};

/// The generator and verifier registries of one process
#[derive(Debug, Clone, Default)]
pub struct AuthorityRegistries {
    /// Registered assertion generators
    pub generators: GeneratorRegistry,
    /// Registered assertion verifiers
    pub verifiers: VerifierRegistry,
}

impl AuthorityRegistries {
    /// Start assembling both registries
    pub fn builder() -> AuthorityRegistriesBuilder {
        AuthorityRegistriesBuilder::default()
    }

    /// Total number of registered authorities across both roles
    pub fn len(&self) -> usize {
        self.generators.len() + self.verifiers.len()
    }

    /// Whether neither registry holds an authority
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty() && self.verifiers.is_empty()
    }
}

/// Builder assembling generator and verifier registries together
#[derive(Default)]
pub struct AuthorityRegistriesBuilder {
    generators: RegistryBuilder<Generators>,
    verifiers: RegistryBuilder<Verifiers>,
}

impl AuthorityRegistriesBuilder {
    /// Register an assertion generator
    pub fn generator(&mut self, generator: GeneratorRef) -> Result<&mut Self, RegistryError> {
        self.generators.register(generator)?;
        Ok(self)
    }

    /// Register an assertion verifier
    pub fn verifier(&mut self, verifier: VerifierRef) -> Result<&mut Self, RegistryError> {
        self.verifiers.register(verifier)?;
        Ok(self)
    }

    /// Finish assembly
    pub fn build(self) -> AuthorityRegistries {
        AuthorityRegistries {
            generators: self.generators.build(),
            verifiers: self.verifiers.build(),
        }
    }
}
