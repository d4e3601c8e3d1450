//! HTTP request handlers

pub mod callback;
pub mod health;
pub mod home;
pub mod messages;
