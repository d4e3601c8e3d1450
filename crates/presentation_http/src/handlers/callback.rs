//! Gupshup webhook handler
//!
//! Acknowledges every callback immediately and answers user messages with
//! an echo in a detached task.

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use integration_gupshup::CallbackPayload;
use tracing::{debug, error, instrument, warn};

use crate::state::AppState;

/// Gupshup webhook (POST)
///
/// Always `200` with an empty body, also for payloads that do not parse.
/// Bodies that cannot be read (including oversized ones) are logged and
/// acknowledged the same way.
#[instrument(skip_all)]
pub async fn handle_callback(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> StatusCode {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, status = %e.status(), "Ignoring unreadable callback body");
            return StatusCode::OK;
        },
    };

    debug!(size = body.len(), "Callback body read");

    let payload: CallbackPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed callback body");
            return StatusCode::OK;
        },
    };

    let event = match payload.into_event() {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed callback event");
            return StatusCode::OK;
        },
    };

    debug!(event_type = %event.event_type(), "Callback received");

    let echo = state.echo_service.clone();
    tokio::spawn(async move {
        if let Err(e) = echo.handle(event).await {
            error!(error = %e, "Echo reply failed");
        }
    });

    StatusCode::OK
}
