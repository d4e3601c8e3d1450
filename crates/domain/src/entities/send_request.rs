//! Outbound send request entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Attachment, SentContent};
use crate::{errors::DomainError, value_objects::Recipient};

/// A normalized request to deliver text and/or an attachment to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    /// Destination number
    pub recipient: Recipient,
    /// Plain text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Media attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl SendRequest {
    /// Build a validated request
    ///
    /// At least one of `text` or `attachment` must be present; an attachment
    /// must carry well-formed URLs.
    pub fn new(
        recipient: Recipient,
        text: Option<String>,
        attachment: Option<Attachment>,
    ) -> Result<Self, DomainError> {
        let text = text.filter(|t| !t.is_empty());

        if text.is_none() && attachment.is_none() {
            return Err(DomainError::invalid_request(
                "either message text or an attachment is required",
            ));
        }

        if let Some(attachment) = &attachment {
            attachment
                .validate()
                .map_err(|e| DomainError::invalid_request(e.to_string()))?;
        }

        Ok(Self {
            recipient,
            text,
            attachment,
        })
    }

    /// A plain text message
    pub fn text(recipient: Recipient, text: impl Into<String>) -> Self {
        Self {
            recipient,
            text: Some(text.into()),
            attachment: None,
        }
    }

    /// A media message
    pub fn attachment(recipient: Recipient, attachment: Attachment) -> Self {
        Self {
            recipient,
            text: None,
            attachment: Some(attachment),
        }
    }

    /// What gets echoed back in the send result
    ///
    /// The attachment takes precedence over text when both are present.
    pub fn content(&self) -> SentContent {
        match (&self.attachment, &self.text) {
            (Some(attachment), _) => SentContent::Attachment(attachment.clone()),
            (None, Some(text)) => SentContent::Text(text.clone()),
            (None, None) => SentContent::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> Recipient {
        Recipient::new("9190000").unwrap()
    }

    #[test]
    fn text_only_request_is_valid() {
        let request = SendRequest::new(recipient(), Some("hi".to_string()), None).unwrap();
        assert_eq!(request.text.as_deref(), Some("hi"));
        assert!(request.attachment.is_none());
    }

    #[test]
    fn attachment_only_request_is_valid() {
        let request =
            SendRequest::new(recipient(), None, Some(Attachment::new("https://x/img.png")))
                .unwrap();
        assert!(request.attachment.is_some());
    }

    #[test]
    fn empty_request_is_rejected() {
        let result = SendRequest::new(recipient(), None, None);
        assert!(matches!(result, Err(DomainError::InvalidRequest(_))));
    }

    #[test]
    fn empty_text_counts_as_missing() {
        let result = SendRequest::new(recipient(), Some(String::new()), None);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_attachment_url_is_rejected() {
        let result = SendRequest::new(recipient(), None, Some(Attachment::new("not a url")));
        assert!(matches!(result, Err(DomainError::InvalidRequest(_))));
    }

    #[test]
    fn content_prefers_attachment() {
        let attachment = Attachment::new("https://x/img.png");
        let request = SendRequest::new(
            recipient(),
            Some("ignored".to_string()),
            Some(attachment.clone()),
        )
        .unwrap();
        assert_eq!(request.content(), SentContent::Attachment(attachment));
    }

    #[test]
    fn content_falls_back_to_text() {
        let request = SendRequest::text(recipient(), "hello");
        assert_eq!(request.content(), SentContent::Text("hello".to_string()));
    }
}
