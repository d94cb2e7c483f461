//! Subcommand handlers

pub mod check;
pub mod id;
pub mod init;
pub mod list;

use anyhow::{Context, Result};
use std::path::Path;

use warden_core::{ConfigLoad, WardenConfig};

/// Load a configuration file, attaching the path to any error
pub fn load_config(path: &Path) -> Result<WardenConfig> {
    WardenConfig::load_from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
