//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-wide
//! concerns: configuration loading and log initialisation.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DemoConfig, GupshupAppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
