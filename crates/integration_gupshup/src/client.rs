//! Gupshup client for sending messages
//!
//! Posts form-encoded messages to the Gupshup WhatsApp API and downloads
//! attachment media for type detection.

use std::time::Duration;

use bytes::Bytes;
use domain::{ProviderMessage, ProviderReply, ProviderResponse};
use reqwest::{
    Client,
    header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Gupshup API errors
#[derive(Debug, Error)]
pub enum GupshupError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Media download failed: {status} for {url}")]
    MediaDownload { status: u16, url: String },

    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// Gupshup client configuration
#[derive(Clone)]
pub struct GupshupClientConfig {
    /// API base URL (default: https://api.gupshup.io/sm/api/v1)
    pub base_url: String,
    /// API key sent in the `apikey` header
    pub api_key: String,
    /// Messaging channel (default: whatsapp)
    pub channel: String,
    /// Gupshup app name (`src.name`)
    pub app_name: String,
    /// Registered source number
    pub source: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GupshupClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.gupshup.io/sm/api/v1".to_string(),
            api_key: String::new(),
            channel: "whatsapp".to_string(),
            app_name: String::new(),
            source: String::new(),
            timeout_secs: 30,
        }
    }
}

impl std::fmt::Debug for GupshupClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GupshupClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("channel", &self.channel)
            .field("app_name", &self.app_name)
            .field("source", &self.source)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Client for the Gupshup messaging API
#[derive(Debug, Clone)]
pub struct GupshupClient {
    /// Client carrying the API key headers, used only for Gupshup calls
    api: Client,
    /// Plain client for third-party media hosts
    media: Client,
    config: GupshupClientConfig,
}

impl GupshupClient {
    /// Create a new Gupshup client
    pub fn new(config: GupshupClientConfig) -> Result<Self, GupshupError> {
        if config.api_key.is_empty() {
            return Err(GupshupError::Configuration(
                "api_key is required".to_string(),
            ));
        }
        if config.app_name.is_empty() {
            return Err(GupshupError::Configuration(
                "app_name is required".to_string(),
            ));
        }
        if config.source.is_empty() {
            return Err(GupshupError::Configuration("source is required".to_string()));
        }

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| GupshupError::Configuration("api_key is not a valid header".to_string()))?;
        headers.insert("apikey", api_key);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let timeout = Duration::from_secs(config.timeout_secs);
        let api = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        let media = Client::builder().timeout(timeout).build()?;

        Ok(Self { api, media, config })
    }

    /// Configured channel identifier
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.config.channel
    }

    /// Form fields for a send call, in provider order
    pub fn message_form(
        &self,
        destination: &str,
        message: &ProviderMessage,
    ) -> Result<Vec<(&'static str, String)>, GupshupError> {
        Ok(vec![
            ("channel", self.config.channel.clone()),
            ("src.name", self.config.app_name.clone()),
            ("source", self.config.source.clone()),
            ("destination", destination.to_string()),
            ("message", message.to_form_value()?),
        ])
    }

    /// Send a message and return the provider's response body as a JSON object
    pub async fn send_message(
        &self,
        destination: &str,
        message: &ProviderMessage,
    ) -> Result<ProviderResponse, GupshupError> {
        let reply = self.send_message_raw(destination, message).await?;
        Ok(parse_response_body(&reply.body))
    }

    /// Send a message and return the provider's body untouched
    #[instrument(skip(self, message), fields(to = %destination, kind = message.kind()))]
    pub async fn send_message_raw(
        &self,
        destination: &str,
        message: &ProviderMessage,
    ) -> Result<ProviderReply, GupshupError> {
        let form = self.message_form(destination, message)?;

        debug!("Sending Gupshup message");

        let response = self
            .api
            .post(format!("{}/msg", self.config.base_url.trim_end_matches('/')))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Gupshup rejected message");
            return Err(GupshupError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ProviderReply { content_type, body })
    }

    /// Download attachment bytes, optionally with caller-supplied headers
    #[instrument(skip(self, headers))]
    pub async fn fetch_media(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
    ) -> Result<Bytes, GupshupError> {
        let mut request = self.media.get(url);
        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GupshupError::MediaDownload {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        debug!(size = bytes.len(), "Media downloaded");
        Ok(bytes)
    }
}

/// Normalize a provider body into a JSON object
///
/// Non-object JSON is wrapped under `response`; non-JSON text under `raw`.
fn parse_response_body(body: &str) -> ProviderResponse {
    if body.trim().is_empty() {
        return ProviderResponse::new();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            let mut map = ProviderResponse::new();
            map.insert("response".to_string(), other);
            map
        },
        Err(_) => {
            let mut map = ProviderResponse::new();
            map.insert("raw".to_string(), Value::String(body.to_string()));
            map
        },
    }
}
