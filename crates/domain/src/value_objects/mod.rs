//! Value objects

pub mod geo_location;
pub mod menu_constraints;
pub mod party_size;

pub use geo_location::GeoLocation;
pub use menu_constraints::MenuConstraints;
pub use party_size::PartySize;
