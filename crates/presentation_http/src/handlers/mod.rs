//! HTTP request handlers

pub mod health;
pub mod location;
pub mod menu;
pub mod photo;
pub mod speech;
