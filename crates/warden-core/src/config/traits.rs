//! Core configuration traits for the Warden configuration system

use crate::WardenError;
use std::path::Path;

/// Configuration that can be loaded from disk
pub trait ConfigLoad: Sized {
    /// Parse configuration from its textual form
    fn from_toml_str(content: &str) -> Result<Self, WardenError>;

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> Result<Self, WardenError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WardenError::from(e).with_context(format!(
                "Failed to read config file {}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }
}

/// Trait for configuration validation
pub trait ConfigValidation {
    /// Validate this configuration
    fn validate(&self) -> Result<(), WardenError>;
}
