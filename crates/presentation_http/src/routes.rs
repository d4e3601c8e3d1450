//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_json_bytes;

    Router::new()
        .route("/", get(handlers::home::index))
        .route("/health", get(handlers::health::health_check))
        // Gupshup webhook
        .route("/callback", post(handlers::callback::handle_callback))
        // Outbound sends (body limit applies to this route only)
        .route(
            "/msg",
            get(handlers::messages::send_demo_message)
                .post(handlers::messages::send_message)
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
        .layer(TraceLayer::new_for_http())
        // Attach state
        .with_state(state)
}
