//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `gupshup`: provider credentials and the diagnostic send

mod gupshup;
mod server;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use gupshup::{DemoConfig, GupshupAppConfig};
pub use server::ServerConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Gupshup configuration
    #[serde(default)]
    pub gupshup: GupshupAppConfig,

    /// Diagnostic send configuration
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        // Defaults come from the section structs' serde defaults
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., RELAY_GUPSHUP__API_KEY)
            .add_source(
                config::Environment::with_prefix("RELAY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration parsed");
        Ok(config)
    }

    /// Check that the settings needed to reach the provider are present
    ///
    /// # Errors
    ///
    /// Returns a message naming every missing setting.
    pub fn validate(&self) -> Result<(), String> {
        let missing = self.gupshup.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Missing required configuration: {}",
                missing.join(", ")
            ))
        }
    }
}
