//! Warden Init - Assertion Authority Initialization
//!
//! Brings every registered assertion generator and verifier into an
//! initialized state at process start, using caller-supplied configuration
//! records where available and an empty configuration otherwise.
//!
//! ```rust,no_run
//! use warden_core::{ConfigLoad, WardenConfig};
//! use warden_init::initialize_from_config;
//! use warden_registry::AuthorityRegistries;
//!
//! # fn run(registries: &AuthorityRegistries) -> Result<(), Box<dyn std::error::Error>> {
//! let config = WardenConfig::load_from_file("warden.toml".as_ref())?;
//! initialize_from_config(&config, registries)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod errors;
pub mod orchestrator;

pub use errors::{InitFailure, InitializationError};
pub use orchestrator::initialize_enclave_assertion_authorities;

use warden_core::WardenConfig;
use warden_registry::AuthorityRegistries;

/// Initialize every registered authority from a loaded configuration file
pub fn initialize_from_config(
    config: &WardenConfig,
    registries: &AuthorityRegistries,
) -> Result<(), InitializationError> {
    initialize_enclave_assertion_authorities(&config.authorities, registries)
}
