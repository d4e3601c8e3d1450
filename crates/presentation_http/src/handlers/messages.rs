//! Outbound message handlers

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use domain::{Attachment, Recipient, SendRequest, SendResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Body of `POST /msg`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageBody {
    /// Recipient phone number
    #[validate(length(min = 1, message = "recipient is required"))]
    pub to: String,

    /// Text to send, or the caption fallback when no attachment is given
    #[serde(default)]
    pub message: Option<String>,

    /// Single media attachment
    #[serde(default)]
    #[validate(nested)]
    pub attachment: Option<Attachment>,
}

impl SendMessageBody {
    /// Convert into a domain send request
    ///
    /// # Errors
    /// Returns a domain error for a bad recipient or a request with no content.
    pub fn into_request(self) -> Result<SendRequest, domain::DomainError> {
        let recipient = Recipient::new(self.to)?;
        SendRequest::new(recipient, self.message, self.attachment)
    }
}

/// Send a message (POST)
///
/// Responds with one result per provider call, in send order.
#[instrument(skip_all, fields(to = %body.to))]
pub async fn send_message(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SendMessageBody>,
) -> Result<Json<Vec<SendResult>>, ApiError> {
    let request = body
        .into_request()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let results = state.dispatch_service.send_batch(request).await?;
    info!(count = results.len(), "Message sent");

    Ok(Json(results))
}

/// Diagnostic send (GET)
///
/// Sends the configured demo text and relays the provider's body and
/// content type verbatim.
#[instrument(skip(state))]
pub async fn send_demo_message(State(state): State<AppState>) -> Result<Response, ApiError> {
    let demo = &state.config.demo;
    let destination = demo
        .destination
        .as_deref()
        .ok_or_else(|| ApiError::Internal("demo.destination is not configured".to_string()))?;

    let recipient = Recipient::new(destination)
        .map_err(|e| ApiError::Internal(format!("demo.destination: {e}")))?;

    let reply = state
        .dispatch_service
        .send_raw(&SendRequest::text(recipient, demo.text.clone()))
        .await?;

    let content_type = reply
        .content_type
        .unwrap_or_else(|| "text/plain; charset=utf-8".to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], reply.body).into_response())
}
