//! DTOs for beneficiary endpoints.

use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use crate::domain::money::Percentage;

/// Request to add a beneficiary to an existing account.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBeneficiaryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Allocation share; without it the first beneficiary gets 100% and
    /// later ones 0%.
    pub allocation_percentage: Option<Percentage>,

    /// New allocations for existing beneficiaries, freeing up the share the
    /// newcomer takes. Required whenever a non-zero allocation is added to a
    /// fully allocated account.
    #[serde(default)]
    pub rebalancing: HashMap<String, Percentage>,
}

/// Optional body of a beneficiary delete, redistributing the freed share.
///
/// Keys are the names of remaining beneficiaries; values are their new
/// allocations. The rebalanced set must total 100% or 0%.
#[derive(Debug, Default, Deserialize)]
pub struct RemoveBeneficiaryRequest {
    #[serde(default)]
    pub rebalancing: HashMap<String, Percentage>,
}
