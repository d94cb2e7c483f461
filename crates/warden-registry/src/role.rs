//! Authority roles
//!
//! Generators and verifiers are stored in separate registries but are driven
//! through the same initialization contract. A role marker selects the trait
//! object a registry stores so one generic registry serves both families.

use std::fmt;

use warden_core::{AssertionGenerator, AssertionVerifier, EnclaveAssertionAuthority};

/// Marker describing one authority family
pub trait AuthorityRole: Send + Sync + 'static {
    /// Trait object stored in registries of this role
    type Authority: ?Sized + EnclaveAssertionAuthority;

    /// Role kind, used in diagnostics
    const KIND: RoleKind;
}

/// Runtime name of an authority role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// Assertion generators
    Generator,
    /// Assertion verifiers
    Verifier,
}

impl RoleKind {
    /// Human-readable role name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generator => "assertion generator",
            Self::Verifier => "assertion verifier",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assertion generator role
#[derive(Debug)]
pub enum Generators {}

impl AuthorityRole for Generators {
    type Authority = dyn AssertionGenerator;
    const KIND: RoleKind = RoleKind::Generator;
}

/// Assertion verifier role
#[derive(Debug)]
pub enum Verifiers {}

impl AuthorityRole for Verifiers {
    type Authority = dyn AssertionVerifier;
    const KIND: RoleKind = RoleKind::Verifier;
}
