//! Application layer - Use cases and orchestration
//!
//! Holds the outbound dispatcher and the inbound echo handler, plus the
//! ports they use to reach the provider. Adapters live in infrastructure.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
