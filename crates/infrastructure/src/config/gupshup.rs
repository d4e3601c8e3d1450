//! Gupshup provider configuration and the diagnostic send used by `GET /msg`.

use std::collections::BTreeMap;

use integration_gupshup::GupshupClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Gupshup integration configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GupshupAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Messaging channel
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Gupshup app name (`src.name`)
    #[serde(default)]
    pub app_name: Option<String>,

    /// Registered source number
    #[serde(default)]
    pub source: Option<String>,

    /// Request timeout in seconds for provider and media calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra headers sent when downloading attachment media
    #[serde(default)]
    pub media_headers: BTreeMap<String, String>,
}

impl std::fmt::Debug for GupshupAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GupshupAppConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("channel", &self.channel)
            .field("app_name", &self.app_name)
            .field("source", &self.source)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "media_headers",
                &format!("[{} entries]", self.media_headers.len()),
            )
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.gupshup.io/sm/api/v1".to_string()
}

fn default_channel() -> String {
    "whatsapp".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GupshupAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            channel: default_channel(),
            app_name: None,
            source: None,
            timeout_secs: default_timeout_secs(),
            media_headers: BTreeMap::new(),
        }
    }
}

impl GupshupAppConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Names of required settings that are missing
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key_str().is_none_or(str::is_empty) {
            missing.push("gupshup.api_key");
        }
        if self.app_name.as_deref().is_none_or(str::is_empty) {
            missing.push("gupshup.app_name");
        }
        if self.source.as_deref().is_none_or(str::is_empty) {
            missing.push("gupshup.source");
        }
        missing
    }

    /// Build the client configuration
    ///
    /// Missing values become empty strings; the client rejects them.
    #[must_use]
    pub fn to_client_config(&self) -> GupshupClientConfig {
        GupshupClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key_str().unwrap_or_default().to_string(),
            channel: self.channel.clone(),
            app_name: self.app_name.clone().unwrap_or_default(),
            source: self.source.clone().unwrap_or_default(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Diagnostic message sent by `GET /msg`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Recipient of the diagnostic message (unset disables the endpoint)
    #[serde(default)]
    pub destination: Option<String>,

    /// Text of the diagnostic message
    #[serde(default = "default_demo_text")]
    pub text: String,
}

fn default_demo_text() -> String {
    "Hello from the Gupshup relay".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            destination: None,
            text: default_demo_text(),
        }
    }
}
