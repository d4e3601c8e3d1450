//! Outbound dispatcher
//!
//! Turns a `SendRequest` into one or two provider calls. Attachments are
//! probed first so the provider receives the right media type.

use std::sync::Arc;

use domain::{ProviderMessage, ProviderReply, SendRequest, SendResult};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{MediaProbePort, MessageGatewayPort};

/// How a send request is split into provider calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// One provider call
    Single,
    /// Attachment first, then its caption as a separate text message
    AttachmentThenCaption,
}

impl BatchPolicy {
    /// Pick the policy for a request
    pub fn for_request(request: &SendRequest) -> Self {
        match &request.attachment {
            Some(attachment) if attachment.caption().is_some() => Self::AttachmentThenCaption,
            _ => Self::Single,
        }
    }

    /// Expand a request into the ordered list of single sends
    pub fn plan(self, request: SendRequest) -> Vec<SendRequest> {
        match (self, request.attachment) {
            (Self::AttachmentThenCaption, Some(attachment)) => {
                let caption = attachment.caption().unwrap_or_default().to_string();
                vec![
                    SendRequest::attachment(request.recipient.clone(), attachment),
                    SendRequest::text(request.recipient, caption),
                ]
            },
            (_, attachment) => vec![SendRequest {
                recipient: request.recipient,
                text: request.text,
                attachment,
            }],
        }
    }
}

/// Service that delivers send requests through the provider
pub struct DispatchService {
    gateway: Arc<dyn MessageGatewayPort>,
    media_probe: Arc<dyn MediaProbePort>,
}

impl std::fmt::Debug for DispatchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchService").finish_non_exhaustive()
    }
}

impl DispatchService {
    /// Create a new dispatcher
    #[must_use]
    pub fn new(gateway: Arc<dyn MessageGatewayPort>, media_probe: Arc<dyn MediaProbePort>) -> Self {
        Self {
            gateway,
            media_probe,
        }
    }

    /// Build the provider message for a single request
    ///
    /// Attachments are probed for their media category; otherwise the text
    /// body is used as-is.
    pub async fn build_message(
        &self,
        request: &SendRequest,
    ) -> Result<ProviderMessage, ApplicationError> {
        if let Some(attachment) = &request.attachment {
            let category = self.media_probe.probe(&attachment.url).await?;
            debug!(url = %attachment.url, category = %category, "Attachment probed");
            return Ok(ProviderMessage::media(category, attachment));
        }

        Ok(ProviderMessage::text(request.text.clone().unwrap_or_default()))
    }

    /// Send exactly one provider message for this request
    #[instrument(skip(self, request), fields(recipient = %request.recipient))]
    pub async fn send(&self, request: &SendRequest) -> Result<SendResult, ApplicationError> {
        let message = self.build_message(request).await?;
        let response = self.gateway.deliver(&request.recipient, &message).await?;

        debug!(kind = message.kind(), "Provider accepted message");
        Ok(SendResult::new(request.content(), response))
    }

    /// Send exactly one provider message and keep the provider body as received
    #[instrument(skip(self, request), fields(recipient = %request.recipient))]
    pub async fn send_raw(&self, request: &SendRequest) -> Result<ProviderReply, ApplicationError> {
        let message = self.build_message(request).await?;
        self.gateway.deliver_raw(&request.recipient, &message).await
    }

    /// Send a request according to its batching policy
    ///
    /// Calls are issued strictly in order; the first failure aborts the batch.
    #[instrument(skip(self, request), fields(recipient = %request.recipient))]
    pub async fn send_batch(&self, request: SendRequest) -> Result<Vec<SendResult>, ApplicationError> {
        let policy = BatchPolicy::for_request(&request);
        let plan = policy.plan(request);

        let mut results = Vec::with_capacity(plan.len());
        for part in &plan {
            results.push(self.send(part).await?);
        }

        info!(?policy, sent = results.len(), "Send request dispatched");
        Ok(results)
    }
}
