//! Configuration loading and validation

mod authority;
mod traits;

pub use authority::{AuthorityConfig, WardenConfig};
pub use traits::{ConfigLoad, ConfigValidation};
