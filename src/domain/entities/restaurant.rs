//! Restaurant entity carrying the benefit rate for its dinings.

use crate::domain::entities::dining::Dining;
use crate::domain::money::{MonetaryAmount, Percentage};

/// A restaurant participating in the rewards network.
///
/// The benefit percentage is the rate applied to a dining's amount to
/// compute the total reward contribution for the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    /// Database identity; `None` until first saved.
    pub entity_id: Option<i64>,
    /// Business key, unique across restaurants.
    pub merchant_number: String,
    pub name: String,
    pub benefit_percentage: Percentage,
}

impl Restaurant {
    pub fn new(
        merchant_number: impl Into<String>,
        name: impl Into<String>,
        benefit_percentage: Percentage,
    ) -> Self {
        Self {
            entity_id: None,
            merchant_number: merchant_number.into(),
            name: name.into(),
            benefit_percentage,
        }
    }

    /// Computes the reward benefit this restaurant grants for a dining.
    ///
    /// Routes through [`MonetaryAmount::multiply_by`], the system's single
    /// rounding point.
    pub fn calculate_benefit_for(&self, dining: &Dining) -> MonetaryAmount {
        dining.amount.multiply_by(self.benefit_percentage)
    }
}
