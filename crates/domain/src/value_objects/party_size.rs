//! Party size value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Number of diners in a menu request, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartySize(u32);

impl PartySize {
    /// Create a new party size
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `count` is zero.
    pub fn new(count: u32) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::validation("people must be at least 1"));
        }
        Ok(Self(count))
    }

    /// Get the raw count
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
