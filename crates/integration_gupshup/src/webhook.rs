//! Gupshup webhook payloads
//!
//! Decodes inbound callbacks into `InboundEvent`s. Only the fields the relay
//! acts on are typed; everything else is kept as raw JSON.

use domain::{DomainError, InboundContent, InboundEvent, Recipient};
use serde::Deserialize;
use serde_json::Value;

/// Top-level callback body
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackPayload {
    /// Event type (`message`, `failed`, `message-event`, ...)
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event-specific body
    #[serde(default)]
    pub payload: Value,
    /// App name the callback belongs to
    #[serde(default)]
    pub app: Option<String>,
}

/// Body of a `message` event
#[derive(Debug, Deserialize)]
struct MessagePayload {
    source: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl CallbackPayload {
    /// Classify this callback
    pub fn into_event(self) -> Result<InboundEvent, DomainError> {
        match self.event_type.as_str() {
            "message" => {
                let message: MessagePayload = serde_json::from_value(self.payload)
                    .map_err(|e| DomainError::MalformedEvent(e.to_string()))?;
                let source = Recipient::new(message.source)?;
                let content = message_content(&message.kind, &message.payload)?;
                Ok(InboundEvent::Message { source, content })
            },
            "failed" => Ok(InboundEvent::Failed {
                details: self.payload,
            }),
            _ => Ok(InboundEvent::Other {
                event_type: self.event_type,
            }),
        }
    }
}

fn message_content(kind: &str, payload: &Value) -> Result<InboundContent, DomainError> {
    match kind {
        "image" => {
            let url = string_field(payload, "url")
                .ok_or_else(|| DomainError::MalformedEvent("image without url".to_string()))?;
            Ok(InboundContent::Image { url })
        },
        "location" => {
            let longitude = coordinate(payload, "longitude")?;
            let latitude = coordinate(payload, "latitude")?;
            Ok(InboundContent::Location {
                longitude,
                latitude,
            })
        },
        _ => match string_field(payload, "text") {
            Some(text) => Ok(InboundContent::Text { text }),
            None if kind == "text" => Err(DomainError::MalformedEvent(
                "text message without text".to_string(),
            )),
            None => Ok(InboundContent::Unsupported {
                kind: kind.to_string(),
            }),
        },
    }
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Render a coordinate the way the provider sent it (number or string)
fn coordinate(payload: &Value, key: &str) -> Result<String, DomainError> {
    match payload.get(key) {
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(DomainError::MalformedEvent(format!("location without {key}"))),
    }
}
