//! Inbound webhook event entity

use serde::Serialize;

use crate::value_objects::Recipient;

/// Content of a user message pushed by the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboundContent {
    /// An image with its hosted URL
    Image { url: String },
    /// A shared location; coordinates are kept as the provider rendered them
    Location { longitude: String, latitude: String },
    /// A text message (also used for any other type that carries text)
    Text { text: String },
    /// A type this relay does not answer to
    Unsupported { kind: String },
}

/// A classified webhook event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboundEvent {
    /// A user sent something to the bot
    Message {
        source: Recipient,
        content: InboundContent,
    },
    /// A previously sent message could not be delivered
    Failed { details: serde_json::Value },
    /// Any other event type (delivery receipts, user-events, ...)
    Other { event_type: String },
}

impl InboundEvent {
    /// Webhook `type` this event was classified from
    pub fn event_type(&self) -> &str {
        match self {
            Self::Message { .. } => "message",
            Self::Failed { .. } => "failed",
            Self::Other { event_type } => event_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names() {
        let message = InboundEvent::Message {
            source: Recipient::new("91900").unwrap(),
            content: InboundContent::Text {
                text: "hi".to_string(),
            },
        };
        assert_eq!(message.event_type(), "message");

        let failed = InboundEvent::Failed {
            details: serde_json::json!({"code": 1002}),
        };
        assert_eq!(failed.event_type(), "failed");

        let other = InboundEvent::Other {
            event_type: "user-event".to_string(),
        };
        assert_eq!(other.event_type(), "user-event");
    }
}
