//! Warden Testing Infrastructure
//!
//! Controllable authorities, registry factories and proptest strategies shared
//! by the integration tests of the Warden crates.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! warden-testkit = { workspace = true }
//! ```
//!
//! Then in your tests:
//! ```rust,no_run
//! use warden_core::EnclaveIdentityType;
//! use warden_testkit::*;
//!
//! let generator = fake(EnclaveIdentityType::NullIdentity, "Any");
//! let registries = registries(&[generator.clone()], &[]);
//! assert_eq!(registries.generators.len(), 1);
//! ```

pub mod authority;
pub mod factories;
pub mod strategies;

pub use authority::FakeAuthority;
pub use factories::*;
pub use strategies::*;
