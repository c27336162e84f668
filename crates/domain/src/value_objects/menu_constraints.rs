//! Menu request constraints

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::PartySize;

/// Constraints for a menu recommendation: how many people are eating,
/// what they want to spend and what they like. Budget and taste are
/// free-form text passed to the model as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConstraints {
    people: PartySize,
    budget: String,
    taste: String,
}

impl MenuConstraints {
    /// Create menu constraints
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `people` is zero or the
    /// budget or taste descriptor is empty.
    pub fn new(
        people: u32,
        budget: impl Into<String>,
        taste: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let people = PartySize::new(people)?;
        let budget = budget.into();
        let taste = taste.into();

        if budget.trim().is_empty() {
            return Err(DomainError::validation("budget is required"));
        }
        if taste.trim().is_empty() {
            return Err(DomainError::validation("taste is required"));
        }

        Ok(Self {
            people,
            budget,
            taste,
        })
    }

    /// Party size
    #[must_use]
    pub const fn people(&self) -> PartySize {
        self.people
    }

    /// Budget descriptor
    #[must_use]
    pub fn budget(&self) -> &str {
        &self.budget
    }

    /// Taste descriptor
    #[must_use]
    pub fn taste(&self) -> &str {
        &self.taste
    }
}
