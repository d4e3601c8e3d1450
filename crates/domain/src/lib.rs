//! Domain layer for the Gupshup relay
//!
//! Contains the transient message shapes exchanged between the HTTP surface,
//! the dispatcher and the provider, plus their validation rules.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
