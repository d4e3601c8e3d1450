//! Gupshup relay HTTP presentation layer
//!
//! Webhook intake, the outbound send endpoint and the liveness probe.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use handlers::messages::SendMessageBody;
pub use middleware::ValidatedJson;
pub use routes::create_router;
pub use server::serve_with_shutdown;
pub use state::AppState;
