//! Send result entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Attachment;

/// Body returned by the provider for a send call
pub type ProviderResponse = Map<String, Value>;

/// Provider body exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    /// `Content-Type` of the provider response, if any
    pub content_type: Option<String>,
    /// Unparsed body text
    pub body: String,
}

/// The content that was sent, echoed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentContent {
    Text(String),
    Attachment(Attachment),
}

/// Outcome of a single provider call
///
/// Serializes as `{ "message": <content>, ...provider fields }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendResult {
    pub message: SentContent,
    #[serde(flatten)]
    pub provider: ProviderResponse,
}

impl SendResult {
    /// Pair sent content with the provider's response
    ///
    /// A `message` key in the provider body is dropped so the echoed content
    /// is never shadowed.
    pub fn new(message: SentContent, mut provider: ProviderResponse) -> Self {
        provider.remove("message");
        Self { message, provider }
    }
}
