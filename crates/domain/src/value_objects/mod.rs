//! Value Objects - Immutable, identity-less domain primitives

mod media_category;
mod recipient;

pub use media_category::MediaCategory;
pub use recipient::Recipient;
