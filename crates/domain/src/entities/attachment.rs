//! Media attachment entity

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A media reference to be sent to a recipient
///
/// `preview_url` and `original_url` fall back to `url` when absent. `text` is
/// an optional caption which the provider cannot attach to media, so it is
/// delivered as a follow-up text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Publicly reachable media URL
    #[validate(url(message = "attachment url must be an absolute URL"))]
    pub url: String,

    /// Preview image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "previewUrl must be an absolute URL"))]
    pub preview_url: Option<String>,

    /// Full-resolution media URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "originalUrl must be an absolute URL"))]
    pub original_url: Option<String>,

    /// Caption text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Attachment {
    /// Create an attachment pointing at a single URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            preview_url: None,
            original_url: None,
            text: None,
        }
    }

    /// Set the caption text
    #[must_use]
    pub fn with_caption(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the original (full-resolution) URL
    #[must_use]
    pub fn with_original_url(mut self, url: impl Into<String>) -> Self {
        self.original_url = Some(url.into());
        self
    }

    /// Set the preview URL
    #[must_use]
    pub fn with_preview_url(mut self, url: impl Into<String>) -> Self {
        self.preview_url = Some(url.into());
        self
    }

    /// Preview URL, defaulting to `url`
    pub fn preview_url(&self) -> &str {
        self.preview_url.as_deref().unwrap_or(&self.url)
    }

    /// Original URL, defaulting to `url`
    pub fn original_url(&self) -> &str {
        self.original_url.as_deref().unwrap_or(&self.url)
    }

    /// Caption text, if any non-empty caption was supplied
    pub fn caption(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}
