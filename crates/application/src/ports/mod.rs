//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod media_probe_port;
mod message_gateway_port;

#[cfg(test)]
pub use media_probe_port::MockMediaProbePort;
pub use media_probe_port::MediaProbePort;
#[cfg(test)]
pub use message_gateway_port::MockMessageGatewayPort;
pub use message_gateway_port::MessageGatewayPort;
