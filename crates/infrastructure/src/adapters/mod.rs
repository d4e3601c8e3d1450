//! Adapters implementing application ports

mod gupshup_adapter;

pub use gupshup_adapter::GupshupAdapter;
