//! Application services - Use case implementations

mod dispatch_service;
mod echo_service;

pub use dispatch_service::{BatchPolicy, DispatchService};
pub use echo_service::{EchoService, echo_for};
