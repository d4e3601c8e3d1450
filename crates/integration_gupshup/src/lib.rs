//! Gupshup integration
//!
//! Sends WhatsApp messages through the Gupshup REST API, fetches and
//! classifies attachment media, and decodes inbound webhook callbacks.

pub mod client;
pub mod media;
pub mod webhook;

pub use client::{GupshupClient, GupshupClientConfig, GupshupError};
pub use media::probe_media;
pub use webhook::CallbackPayload;
