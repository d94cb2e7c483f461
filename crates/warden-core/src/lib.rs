//! Warden Core - Enclave Assertion Authority Foundation
//!
//! This crate provides the types shared by every Warden crate: the authority
//! capability contract, authority identifier derivation, the exactly-once
//! initialization latch, and the configuration records that feed authority
//! initialization.
//!
//! # Architecture
//!
//! - [`authority`]: `EnclaveAssertionAuthority`, `AssertionGenerator`,
//!   `AssertionVerifier`, `AuthorityId`
//! - [`latch`]: `InitLatch`, the idempotent initialization primitive
//! - [`config`]: `AuthorityConfig` records and the `WardenConfig` file
//! - [`identity`] and [`assertion`]: descriptions and exchange messages

#![forbid(unsafe_code)]

/// Assertion offers, requests and assertions
pub mod assertion;

/// Authority capability contract and identifier derivation
pub mod authority;

/// Configuration records and loading
pub mod config;

/// Unified error handling
pub mod errors;

/// Identity types and descriptions
pub mod identity;

/// Exactly-once initialization latch
pub mod latch;

pub use assertion::{Assertion, AssertionOffer, AssertionRequest};
pub use authority::{
    AssertionGenerator, AssertionVerifier, AuthorityError, AuthorityId,
    EnclaveAssertionAuthority, GeneratorRef, IdentifierError, VerifierRef,
};
pub use config::{AuthorityConfig, ConfigLoad, ConfigValidation, WardenConfig};
pub use errors::WardenError;
pub use identity::{AssertionDescription, EnclaveIdentity, EnclaveIdentityType};
pub use latch::{InitLatch, LatchTransition};
