//! DTOs for account endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Account, Beneficiary};
use crate::domain::money::Percentage;
use crate::error::AppError;

/// Compiled regex for account number validation.
static ACCOUNT_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9}$").unwrap());

/// Compiled regex for credit card number validation.
static CREDIT_CARD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{16}$").unwrap());

/// Request to create an account, optionally with its initial beneficiaries.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Nine-digit account number, unique across accounts.
    #[validate(regex(path = "*ACCOUNT_NUMBER_REGEX", message = "Account number must be 9 digits"))]
    pub number: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Credit card linked to the account for dining matching.
    #[validate(regex(
        path = "*CREDIT_CARD_REGEX",
        message = "Credit card number must be 16 digits"
    ))]
    pub credit_card_number: Option<String>,

    /// Initial beneficiaries; allocations must total 100% (or 0%).
    #[serde(default)]
    #[validate(nested)]
    pub beneficiaries: Vec<BeneficiaryItem>,
}

/// One beneficiary in a create-account request.
#[derive(Debug, Deserialize, Validate)]
pub struct BeneficiaryItem {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Allocation share, e.g. `"50%"` or `"0.5"`. Defaults like a direct
    /// add: 100% for the first beneficiary, 0% for later ones.
    pub allocation_percentage: Option<Percentage>,
}

/// An account as returned by the API.
///
/// The linked credit card number is deliberately not echoed back.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub number: String,
    pub name: String,
    pub beneficiaries: Vec<BeneficiaryResponse>,
}

/// One beneficiary as returned by the API.
#[derive(Debug, Serialize)]
pub struct BeneficiaryResponse {
    pub name: String,
    pub allocation_percentage: Percentage,
}

impl From<&Beneficiary> for BeneficiaryResponse {
    fn from(beneficiary: &Beneficiary) -> Self {
        Self {
            name: beneficiary.name.clone(),
            allocation_percentage: beneficiary.allocation_percentage,
        }
    }
}

impl TryFrom<&Account> for AccountResponse {
    type Error = AppError;

    /// Fails if the account was never persisted and so has no id.
    fn try_from(account: &Account) -> Result<Self, Self::Error> {
        let id = account
            .entity_id
            .ok_or_else(|| AppError::internal("account is missing its database id"))?;
        Ok(Self {
            id,
            number: account.number.clone(),
            name: account.name.clone(),
            beneficiaries: account.beneficiaries().iter().map(Into::into).collect(),
        })
    }
}
