//! DTOs for the reward endpoint.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Distribution, RewardConfirmation};
use crate::domain::money::{MonetaryAmount, Percentage};

/// Compiled regex for credit card number validation.
static CREDIT_CARD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{16}$").unwrap());

/// Compiled regex for merchant number validation.
static MERCHANT_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());

/// A dining transaction submitted for reward.
#[derive(Debug, Deserialize, Validate)]
pub struct RewardRequest {
    /// Amount charged for the dining, e.g. `"100.00"`.
    pub dining_amount: MonetaryAmount,

    #[validate(regex(
        path = "*CREDIT_CARD_REGEX",
        message = "Credit card number must be 16 digits"
    ))]
    pub credit_card_number: String,

    #[validate(regex(
        path = "*MERCHANT_NUMBER_REGEX",
        message = "Merchant number must be 10 digits"
    ))]
    pub merchant_number: String,

    /// Date of the dining; defaults to today when omitted.
    pub dining_date: Option<NaiveDate>,
}

/// Confirmation of a processed reward.
#[derive(Debug, Serialize)]
pub struct RewardResponse {
    pub confirmation_number: String,
    pub account_number: String,
    pub amount: MonetaryAmount,
    pub distributions: Vec<DistributionResponse>,
}

/// One beneficiary's share of the reward.
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub beneficiary: String,
    pub percentage: Percentage,
    pub amount: MonetaryAmount,
}

impl From<&Distribution> for DistributionResponse {
    fn from(distribution: &Distribution) -> Self {
        Self {
            beneficiary: distribution.beneficiary.clone(),
            percentage: distribution.percentage,
            amount: distribution.amount,
        }
    }
}

impl From<RewardConfirmation> for RewardResponse {
    fn from(confirmation: RewardConfirmation) -> Self {
        let contribution = confirmation.account_contribution;
        Self {
            confirmation_number: confirmation.confirmation_number,
            account_number: contribution.account_number,
            amount: contribution.amount,
            distributions: contribution.distributions.iter().map(Into::into).collect(),
        }
    }
}
