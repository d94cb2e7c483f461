//! `warden check`

use anyhow::Result;
use std::path::Path;

use warden_core::ConfigValidation;

use super::load_config;

/// Parse and validate a configuration file
pub fn run(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    config.validate()?;

    println!(
        "{}: {} authority record(s) OK",
        path.display(),
        config.authorities.len()
    );
    Ok(())
}
