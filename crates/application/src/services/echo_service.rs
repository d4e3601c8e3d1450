//! Inbound echo handler
//!
//! Classifies webhook events and mirrors user messages back to the sender.

use std::sync::Arc;

use domain::{Attachment, InboundContent, InboundEvent, SendRequest, SendResult};
use tracing::{debug, info, instrument, warn};

use super::DispatchService;
use crate::error::ApplicationError;

const IMAGE_ECHO_CAPTION: &str = "Echo - image received";

/// Build the echo reply for an event, if it deserves one
///
/// | event   | content   | reply                                          |
/// |---------|-----------|------------------------------------------------|
/// | message | image     | the same image, caption "Echo - image received" |
/// | message | location  | "Echo - Longitude: {lon} and Latitude: {lat}"  |
/// | message | text      | "Echo - {text}"                                |
/// | failed  |           | none                                           |
/// | other   |           | none                                           |
pub fn echo_for(event: &InboundEvent) -> Option<SendRequest> {
    let InboundEvent::Message { source, content } = event else {
        return None;
    };

    match content {
        InboundContent::Image { url } => {
            let attachment = Attachment::new(url.clone())
                .with_original_url(url.clone())
                .with_caption(IMAGE_ECHO_CAPTION);
            Some(SendRequest::attachment(source.clone(), attachment))
        },
        InboundContent::Location {
            longitude,
            latitude,
        } => Some(SendRequest::text(
            source.clone(),
            format!("Echo - Longitude: {longitude} and Latitude: {latitude}"),
        )),
        InboundContent::Text { text } => {
            Some(SendRequest::text(source.clone(), format!("Echo - {text}")))
        },
        InboundContent::Unsupported { .. } => None,
    }
}

/// Service that answers inbound events
#[derive(Debug)]
pub struct EchoService {
    dispatcher: Arc<DispatchService>,
}

impl EchoService {
    /// Create a new echo handler on top of a dispatcher
    #[must_use]
    pub const fn new(dispatcher: Arc<DispatchService>) -> Self {
        Self { dispatcher }
    }

    /// Handle one webhook event
    ///
    /// Sends at most one message; echoes never split captions into a
    /// second send.
    #[instrument(skip(self, event), fields(event_type = %event.event_type()))]
    pub async fn handle(&self, event: InboundEvent) -> Result<Option<SendResult>, ApplicationError> {
        match &event {
            InboundEvent::Failed { details } => {
                warn!(details = %details, "Provider reported a failed delivery");
                return Ok(None);
            },
            InboundEvent::Other { event_type } => {
                debug!(event_type = %event_type, "Ignoring webhook event");
                return Ok(None);
            },
            InboundEvent::Message {
                content: InboundContent::Unsupported { kind },
                ..
            } => {
                debug!(kind = %kind, "No echo for message type");
                return Ok(None);
            },
            InboundEvent::Message { .. } => {},
        }

        let Some(reply) = echo_for(&event) else {
            return Ok(None);
        };

        let result = self.dispatcher.send(&reply).await?;
        info!(recipient = %reply.recipient, "Echo reply sent");
        Ok(Some(result))
    }
}
