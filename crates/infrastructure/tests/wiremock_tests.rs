//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Gupshup adapter delivery against a mock provider
//! - Media probing through the adapter
//! - Error mapping into application errors

use std::collections::BTreeMap;

use application::{ApplicationError, MediaProbePort, MessageGatewayPort};
use domain::{Attachment, MediaCategory, ProviderMessage, Recipient};
use infrastructure::{GupshupAdapter, GupshupAppConfig};
use secrecy::SecretString;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

fn config(base_url: &str) -> GupshupAppConfig {
    GupshupAppConfig {
        base_url: base_url.to_string(),
        api_key: Some(SecretString::from("test-key".to_string())),
        app_name: Some("demoapp".to_string()),
        source: Some("917834811114".to_string()),
        timeout_secs: 5,
        ..Default::default()
    }
}

fn recipient() -> Recipient {
    Recipient::new("919876543210").unwrap()
}

mod gateway_tests {
    use super::*;

    #[tokio::test]
    async fn deliver_returns_provider_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/msg"))
            .and(header("apikey", "test-key"))
            .and(body_string_contains("destination=919876543210"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "submitted",
                "messageId": "abc-123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = GupshupAdapter::from_config(&config(&server.uri())).unwrap();
        let response = adapter
            .deliver(&recipient(), &ProviderMessage::text("hi"))
            .await
            .unwrap();

        assert_eq!(response["status"], "submitted");
        assert_eq!(response["messageId"], "abc-123");
    }

    #[tokio::test]
    async fn deliver_raw_keeps_provider_message_key() {
        let server = MockServer::start().await;
        let body = r#"{"message":"queued","messageId":"x1","status":"submitted"}"#;

        Mock::given(method("POST"))
            .and(path("/msg"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = GupshupAdapter::from_config(&config(&server.uri())).unwrap();
        let reply = adapter
            .deliver_raw(&recipient(), &ProviderMessage::text("hi"))
            .await
            .unwrap();

        assert_eq!(reply.body, body);
    }

    #[tokio::test]
    async fn provider_rejection_is_external_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/msg"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Authentication Failed"))
            .mount(&server)
            .await;

        let adapter = GupshupAdapter::from_config(&config(&server.uri())).unwrap();
        let err = adapter
            .deliver(&recipient(), &ProviderMessage::text("hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ExternalService(ref m) if m.contains("401")));
    }

    #[tokio::test]
    async fn media_message_is_form_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/msg"))
            .and(body_string_contains("%22type%22%3A%22image%22"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = GupshupAdapter::from_config(&config(&server.uri())).unwrap();
        let attachment = Attachment::new("https://cdn.example.com/a.png");
        let message = ProviderMessage::media(MediaCategory::Image, &attachment);

        assert!(adapter.deliver(&recipient(), &message).await.is_ok());
    }
}

mod probe_tests {
    use super::*;

    #[tokio::test]
    async fn probe_classifies_downloaded_bytes() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media/pic"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_HEADER.to_vec()))
            .mount(&server)
            .await;

        let adapter = GupshupAdapter::from_config(&config(&server.uri())).unwrap();
        let category = adapter
            .probe(&format!("{}/media/pic", server.uri()))
            .await
            .unwrap();

        assert_eq!(category, MediaCategory::Image);
    }

    #[tokio::test]
    async fn unknown_bytes_are_files() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media/blob"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain words"))
            .mount(&server)
            .await;

        let adapter = GupshupAdapter::from_config(&config(&server.uri())).unwrap();
        let category = adapter
            .probe(&format!("{}/media/blob", server.uri()))
            .await
            .unwrap();

        assert_eq!(category, MediaCategory::File);
    }

    #[tokio::test]
    async fn configured_media_headers_are_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media/private"))
            .and(header("authorization", "Bearer media-token"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_HEADER.to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let mut cfg = config(&server.uri());
        cfg.media_headers = BTreeMap::from([(
            "Authorization".to_string(),
            "Bearer media-token".to_string(),
        )]);
        let adapter = GupshupAdapter::from_config(&cfg).unwrap();

        let category = adapter
            .probe(&format!("{}/media/private", server.uri()))
            .await
            .unwrap();
        assert_eq!(category, MediaCategory::Image);
    }

    #[tokio::test]
    async fn missing_media_is_external_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/media/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let adapter = GupshupAdapter::from_config(&config(&server.uri())).unwrap();
        let err = adapter
            .probe(&format!("{}/media/gone", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
