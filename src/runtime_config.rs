//! Environment variable-based runtime configuration.
//!
//! ## Environment Variables
//!
//! ### `ZIPROUTE_FORMAT`
//!
//! Default serialization format for structured-data outcomes:
//! - `json` (the default)
//! - `yaml`
//!
//! Unrecognized values fall back to the default rather than erroring, so a
//! bad deployment setting degrades to JSON instead of failing requests.

use std::env;

use crate::classify::Format;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeConfig {
    /// Default classifier format (JSON unless `ZIPROUTE_FORMAT=yaml`)
    pub format: Format,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let format = match env::var("ZIPROUTE_FORMAT") {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "yaml" => Format::Yaml,
                _ => Format::Json,
            },
            Err(_) => Format::Json,
        };
        RuntimeConfig { format }
    }
}
