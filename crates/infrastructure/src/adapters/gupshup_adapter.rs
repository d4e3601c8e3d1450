//! Gupshup adapter
//!
//! Implements `MessageGatewayPort` and `MediaProbePort` using the Gupshup
//! integration crate.

use std::collections::BTreeMap;

use application::error::ApplicationError;
use application::ports::{MediaProbePort, MessageGatewayPort};
use async_trait::async_trait;
use domain::{MediaCategory, ProviderMessage, ProviderReply, ProviderResponse, Recipient};
use integration_gupshup::{GupshupClient, GupshupError, probe_media};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument};

use crate::config::GupshupAppConfig;

/// Adapter that implements the provider ports using `GupshupClient`
pub struct GupshupAdapter {
    client: GupshupClient,
    /// Headers added to every media download
    media_headers: HeaderMap,
}

impl GupshupAdapter {
    /// Create an adapter around an existing client
    #[must_use]
    pub fn new(client: GupshupClient) -> Self {
        Self {
            client,
            media_headers: HeaderMap::new(),
        }
    }

    /// Build the client and media headers from application config
    ///
    /// # Errors
    /// Returns an error if credentials are missing or a media header is
    /// not a valid HTTP header.
    pub fn from_config(config: &GupshupAppConfig) -> Result<Self, GupshupError> {
        let client = GupshupClient::new(config.to_client_config())?;
        let media_headers = header_map(&config.media_headers)?;
        Ok(Self {
            client,
            media_headers,
        })
    }

    /// Get a reference to the underlying client
    #[must_use]
    pub const fn client(&self) -> &GupshupClient {
        &self.client
    }
}

fn header_map(entries: &BTreeMap<String, String>) -> Result<HeaderMap, GupshupError> {
    let mut headers = HeaderMap::with_capacity(entries.len());
    for (name, value) in entries {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GupshupError::Configuration(format!("media header {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GupshupError::Configuration(format!("media header {name}: {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

impl std::fmt::Debug for GupshupAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GupshupAdapter")
            .field("channel", &self.client.channel())
            .field("media_header_count", &self.media_headers.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessageGatewayPort for GupshupAdapter {
    #[instrument(skip(self, message), fields(to = %recipient))]
    async fn deliver(
        &self,
        recipient: &Recipient,
        message: &ProviderMessage,
    ) -> Result<ProviderResponse, ApplicationError> {
        self.client
            .send_message(recipient.as_str(), message)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Gupshup send failed: {e}")))
    }

    #[instrument(skip(self, message), fields(to = %recipient))]
    async fn deliver_raw(
        &self,
        recipient: &Recipient,
        message: &ProviderMessage,
    ) -> Result<ProviderReply, ApplicationError> {
        self.client
            .send_message_raw(recipient.as_str(), message)
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Gupshup send failed: {e}")))
    }
}

#[async_trait]
impl MediaProbePort for GupshupAdapter {
    #[instrument(skip(self))]
    async fn probe(&self, url: &str) -> Result<MediaCategory, ApplicationError> {
        let headers = (!self.media_headers.is_empty()).then(|| self.media_headers.clone());
        let bytes = self.client.fetch_media(url, headers).await.map_err(|e| {
            ApplicationError::ExternalService(format!("Media download failed: {e}"))
        })?;

        let category = probe_media(&bytes);
        debug!(%category, size = bytes.len(), "Classified media");
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn config() -> GupshupAppConfig {
        GupshupAppConfig {
            api_key: Some(SecretString::from("key".to_string())),
            app_name: Some("demoapp".to_string()),
            source: Some("917834811114".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn builds_from_complete_config() {
        let adapter = GupshupAdapter::from_config(&config()).unwrap();
        assert_eq!(adapter.client().channel(), "whatsapp");
        assert!(adapter.media_headers.is_empty());
    }

    #[test]
    fn missing_credentials_fail() {
        let result = GupshupAdapter::from_config(&GupshupAppConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn media_headers_are_parsed() {
        let mut cfg = config();
        cfg.media_headers
            .insert("Authorization".to_string(), "Bearer t".to_string());
        let adapter = GupshupAdapter::from_config(&cfg).unwrap();
        assert_eq!(adapter.media_headers["authorization"], "Bearer t");
    }

    #[test]
    fn invalid_media_header_is_configuration_error() {
        let mut cfg = config();
        cfg.media_headers
            .insert("bad header".to_string(), "x".to_string());
        let err = GupshupAdapter::from_config(&cfg).unwrap_err();
        assert!(matches!(err, GupshupError::Configuration(_)));
    }

    #[test]
    fn debug_hides_client_secrets() {
        let adapter = GupshupAdapter::from_config(&config()).unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("GupshupAdapter"));
        assert!(!debug.contains("key"));
    }
}
