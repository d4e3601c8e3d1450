//! Provider message entity
//!
//! The JSON object that travels inside the `message` form field of a
//! Gupshup send call.

use serde::{Deserialize, Serialize};

use super::Attachment;
use crate::value_objects::MediaCategory;

/// Plain text body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    pub text: String,
}

/// Media body shared by all attachment categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMessage {
    pub url: String,
    pub preview_url: String,
    pub original_url: String,
}

/// A single message as understood by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderMessage {
    Text(TextMessage),
    Image(MediaMessage),
    Video(MediaMessage),
    Audio(MediaMessage),
    File(MediaMessage),
}

impl ProviderMessage {
    /// Build a text message
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextMessage { text: text.into() })
    }

    /// Build a media message for an attachment of the given category
    ///
    /// The caption is not part of the media body.
    pub fn media(category: MediaCategory, attachment: &Attachment) -> Self {
        let body = MediaMessage {
            url: attachment.url.clone(),
            preview_url: attachment.preview_url().to_string(),
            original_url: attachment.original_url().to_string(),
        };

        match category {
            MediaCategory::Image => Self::Image(body),
            MediaCategory::Video => Self::Video(body),
            MediaCategory::Audio => Self::Audio(body),
            MediaCategory::File => Self::File(body),
        }
    }

    /// Provider `type` discriminator
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => MediaCategory::Image.as_str(),
            Self::Video(_) => MediaCategory::Video.as_str(),
            Self::Audio(_) => MediaCategory::Audio.as_str(),
            Self::File(_) => MediaCategory::File.as_str(),
        }
    }

    /// Media body, if this is not a text message
    pub const fn media_body(&self) -> Option<&MediaMessage> {
        match self {
            Self::Text(_) => None,
            Self::Image(m) | Self::Video(m) | Self::Audio(m) | Self::File(m) => Some(m),
        }
    }

    /// Encode as the JSON string placed in the `message` form field
    pub fn to_form_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
