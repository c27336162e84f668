//! Domain layer - value objects and domain errors
//!
//! Everything here is request-scoped and immutable; nothing in this
//! crate performs I/O or keeps state between requests.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{GeoLocation, MenuConstraints, PartySize};
