//! Contribution and confirmation records produced by the reward flow.

use crate::domain::money::{MonetaryAmount, Percentage};

/// One beneficiary's share of a contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub beneficiary: String,
    pub percentage: Percentage,
    pub amount: MonetaryAmount,
}

/// The result of distributing a reward contribution across one account's
/// beneficiaries. Immutable once created; the distribution amounts always
/// reconcile to `amount` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountContribution {
    pub account_number: String,
    pub amount: MonetaryAmount,
    pub distributions: Vec<Distribution>,
}

impl AccountContribution {
    pub fn new(
        account_number: String,
        amount: MonetaryAmount,
        distributions: Vec<Distribution>,
    ) -> Self {
        Self {
            account_number,
            amount,
            distributions,
        }
    }

    /// Looks up the distribution for a beneficiary, if it received one.
    pub fn distribution(&self, beneficiary: &str) -> Option<&Distribution> {
        self.distributions.iter().find(|d| d.beneficiary == beneficiary)
    }
}

/// Acknowledgement of a persisted reward contribution.
///
/// Created once per successful reward by the reward repository, which
/// guarantees the confirmation number is unique. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardConfirmation {
    pub confirmation_number: String,
    pub account_contribution: AccountContribution,
}

impl RewardConfirmation {
    pub fn new(confirmation_number: String, account_contribution: AccountContribution) -> Self {
        Self {
            confirmation_number,
            account_contribution,
        }
    }
}
