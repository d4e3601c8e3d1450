//! Application state shared across handlers

use std::sync::Arc;

use application::{DispatchService, EchoService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Outbound dispatcher for `/msg`
    pub dispatch_service: Arc<DispatchService>,
    /// Echo handler for `/callback`
    pub echo_service: Arc<EchoService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
