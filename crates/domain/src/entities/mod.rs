//! Domain entities
//!
//! Every entity here lives for a single request: built at the HTTP edge,
//! consumed by the dispatcher and dropped once the response is sent.

mod attachment;
mod inbound_event;
mod provider_message;
mod send_request;
mod send_result;

pub use attachment::Attachment;
pub use inbound_event::{InboundContent, InboundEvent};
pub use provider_message::{MediaMessage, ProviderMessage, TextMessage};
pub use send_request::SendRequest;
pub use send_result::{ProviderReply, ProviderResponse, SendResult, SentContent};
