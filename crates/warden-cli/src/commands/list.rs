//! `warden list`

use anyhow::{Context, Result};
use std::path::Path;

use warden_core::EnclaveAssertionAuthority;
use warden_registry::{AuthorityRegistry, AuthorityRole};

/// Print every built-in authority, optionally after an initialization pass
pub fn run(config: Option<&Path>) -> Result<()> {
    let registries = match config {
        Some(path) => super::init::run(path)?,
        None => warden_null::builtin_registries()
            .context("Failed to build authority registries")?,
    };

    print_registry(&registries.generators);
    print_registry(&registries.verifiers);
    Ok(())
}

fn print_registry<R: AuthorityRole>(registry: &AuthorityRegistry<R>) {
    for (id, authority) in registry.iter() {
        let state = if authority.is_initialized() {
            "initialized"
        } else {
            "uninitialized"
        };
        println!(
            "{:<22} {:<28} {}",
            registry.role().as_str(),
            id.as_str(),
            state
        );
    }
}
