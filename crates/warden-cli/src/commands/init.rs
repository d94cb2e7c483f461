//! `warden init`

use anyhow::{Context, Result};
use std::path::Path;

use warden_init::initialize_from_config;
use warden_registry::AuthorityRegistries;

use super::load_config;

/// Run the initialization pass over the built-in registries
pub fn run(path: &Path) -> Result<AuthorityRegistries> {
    let config = load_config(path)?;
    let registries =
        warden_null::builtin_registries().context("Failed to build authority registries")?;

    tracing::info!(
        records = config.authorities.len(),
        authorities = registries.len(),
        "Initializing assertion authorities"
    );
    initialize_from_config(&config, &registries)?;
    tracing::info!("All assertion authorities initialized");

    Ok(registries)
}
