//! Account aggregate owning a set of beneficiaries.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::entities::reward::{AccountContribution, Distribution};
use crate::domain::error::DomainError;
use crate::domain::money::{MonetaryAmount, Percentage};

/// A named recipient of a share of the account's reward contributions.
///
/// Owned exclusively by its [`Account`]; never mutated from outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beneficiary {
    pub name: String,
    pub allocation_percentage: Percentage,
}

impl Beneficiary {
    /// Creates a new beneficiary with the given allocation.
    pub fn new(name: impl Into<String>, allocation_percentage: Percentage) -> Self {
        Self {
            name: name.into(),
            allocation_percentage,
        }
    }
}

/// An account that earns reward contributions, split among its beneficiaries.
///
/// Aggregate root: beneficiaries are reached and mutated only through the
/// account's own operations, which preserve the allocation invariant: the
/// allocation percentages total exactly 100% or exactly 0%. An account may
/// pass through an unbalanced state while beneficiaries are being set up one
/// by one, but an unbalanced account can never distribute a contribution and
/// must never be persisted (the service layer checks [`Account::is_balanced`]
/// before every write).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Database identity; `None` until the account is first saved.
    pub entity_id: Option<i64>,
    /// Business key, unique across accounts.
    pub number: String,
    pub name: String,
    /// Credit card linked to the account for dining matching.
    pub credit_card_number: Option<String>,
    beneficiaries: Vec<Beneficiary>,
}

impl Account {
    /// Creates a new, unsaved account with no beneficiaries.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entity_id: None,
            number: number.into(),
            name: name.into(),
            credit_card_number: None,
            beneficiaries: Vec::new(),
        }
    }

    /// Beneficiaries in insertion order.
    pub fn beneficiaries(&self) -> &[Beneficiary] {
        &self.beneficiaries
    }

    /// Looks up a beneficiary by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BeneficiaryNotFound`] if absent.
    pub fn beneficiary(&self, name: &str) -> Result<&Beneficiary, DomainError> {
        self.beneficiaries
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| DomainError::BeneficiaryNotFound(name.to_string()))
    }

    /// Adds a beneficiary to the account.
    ///
    /// When no allocation is supplied, the first beneficiary defaults to 100%
    /// and later ones to 0%. Explicit allocations are taken as-is: no
    /// automatic rebalancing happens, and the caller is responsible for
    /// reaching a 100% total before distributing or persisting.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateBeneficiary`] if the exact name is
    /// already present; the beneficiary set is left unchanged.
    pub fn add_beneficiary(
        &mut self,
        name: impl Into<String>,
        allocation: Option<Percentage>,
    ) -> Result<(), DomainError> {
        self.add_beneficiary_with_rebalancing(name, allocation, &HashMap::new())
    }

    /// Adds a beneficiary, applying the supplied rebalancing allocations to
    /// the existing beneficiaries first.
    ///
    /// This is how a fully allocated account takes on a newcomer with a
    /// non-zero share: the map frees up allocation from those already present
    /// so the total can stay at 100%. Rebalancing keys must name existing
    /// beneficiaries, not the one being added. An empty map behaves exactly
    /// like [`Account::add_beneficiary`].
    ///
    /// All-or-nothing: on any error the account is left completely unchanged.
    ///
    /// # Errors
    ///
    /// - [`DomainError::DuplicateBeneficiary`] if the exact name is already
    ///   present.
    /// - [`DomainError::BeneficiaryNotFound`] if a rebalancing key does not
    ///   match an existing beneficiary.
    pub fn add_beneficiary_with_rebalancing(
        &mut self,
        name: impl Into<String>,
        allocation: Option<Percentage>,
        rebalancing: &HashMap<String, Percentage>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        if self.beneficiaries.iter().any(|b| b.name == name) {
            return Err(DomainError::DuplicateBeneficiary(name));
        }

        let mut updated = self.beneficiaries.clone();
        for (beneficiary_name, allocation) in rebalancing {
            let beneficiary = updated
                .iter_mut()
                .find(|b| &b.name == beneficiary_name)
                .ok_or_else(|| DomainError::BeneficiaryNotFound(beneficiary_name.clone()))?;
            beneficiary.allocation_percentage = *allocation;
        }

        let allocation = allocation.unwrap_or_else(|| {
            if updated.is_empty() {
                Percentage::one_hundred()
            } else {
                Percentage::zero()
            }
        });
        updated.push(Beneficiary::new(name, allocation));
        self.beneficiaries = updated;
        Ok(())
    }

    /// Removes a beneficiary, applying the supplied rebalancing allocations
    /// to those that remain.
    ///
    /// Removing the sole beneficiary, or one whose allocation is already
    /// zero, needs no rebalancing. Otherwise the map must redistribute the
    /// freed share so the remaining allocations still total 100%.
    ///
    /// All-or-nothing: on any error the account is left completely unchanged.
    ///
    /// # Errors
    ///
    /// - [`DomainError::BeneficiaryNotFound`] if `name` (or any rebalancing
    ///   key) does not match a beneficiary.
    /// - [`DomainError::UnbalancedAllocations`] if the result would violate
    ///   the allocation invariant.
    pub fn remove_beneficiary(
        &mut self,
        name: &str,
        rebalancing: &HashMap<String, Percentage>,
    ) -> Result<(), DomainError> {
        let index = self
            .beneficiaries
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| DomainError::BeneficiaryNotFound(name.to_string()))?;

        // Work on a scratch copy so a failed rebalance cannot leave the
        // account half-mutated.
        let mut remaining = self.beneficiaries.clone();
        remaining.remove(index);

        for (beneficiary_name, allocation) in rebalancing {
            let beneficiary = remaining
                .iter_mut()
                .find(|b| &b.name == beneficiary_name)
                .ok_or_else(|| DomainError::BeneficiaryNotFound(beneficiary_name.clone()))?;
            beneficiary.allocation_percentage = *allocation;
        }

        let total = allocation_total(&remaining);
        if total != Decimal::ONE && total != Decimal::ZERO {
            return Err(DomainError::UnbalancedAllocations(format!(
                "removing '{name}' would leave allocations totalling {total}"
            )));
        }

        self.beneficiaries = remaining;
        Ok(())
    }

    /// True when allocation percentages total exactly 100% or exactly 0%.
    pub fn is_balanced(&self) -> bool {
        let total = allocation_total(&self.beneficiaries);
        total == Decimal::ONE || total == Decimal::ZERO
    }

    /// Distributes a contribution across the beneficiaries.
    ///
    /// Each beneficiary with a non-zero allocation receives
    /// `total.multiply_by(allocation)`, capped at whatever of `total` is
    /// still undistributed, except the last such beneficiary in insertion
    /// order, which receives the remainder. The independent roundings of the
    /// other slices need not sum back exactly; the cap keeps them from
    /// overshooting `total`, and the residual lands on the last beneficiary,
    /// so every distribution is non-negative and they always reconcile to
    /// `total`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnbalancedAllocations`] if the account is
    /// unbalanced or has no non-zero allocation to distribute against.
    pub fn make_contribution(
        &self,
        total: MonetaryAmount,
    ) -> Result<AccountContribution, DomainError> {
        if !self.is_balanced() {
            return Err(DomainError::UnbalancedAllocations(format!(
                "account {} has allocations totalling {}",
                self.number,
                allocation_total(&self.beneficiaries)
            )));
        }

        let recipients: Vec<&Beneficiary> = self
            .beneficiaries
            .iter()
            .filter(|b| !b.allocation_percentage.is_zero())
            .collect();
        if recipients.is_empty() {
            return Err(DomainError::UnbalancedAllocations(format!(
                "account {} has no allocation to distribute against",
                self.number
            )));
        }

        let mut distributions = Vec::with_capacity(recipients.len());
        let mut allocated = MonetaryAmount::zero();
        let last = recipients.len() - 1;
        for (i, beneficiary) in recipients.into_iter().enumerate() {
            let remaining = total.subtract(allocated);
            let amount = if i == last {
                remaining
            } else {
                // Rounded slices can collectively overshoot a small total;
                // never hand out more than is still undistributed.
                let slice = total.multiply_by(beneficiary.allocation_percentage);
                if slice > remaining { remaining } else { slice }
            };
            allocated = allocated.add(amount);
            distributions.push(Distribution {
                beneficiary: beneficiary.name.clone(),
                percentage: beneficiary.allocation_percentage,
                amount,
            });
        }

        Ok(AccountContribution::new(
            self.number.clone(),
            total,
            distributions,
        ))
    }
}

fn allocation_total(beneficiaries: &[Beneficiary]) -> Decimal {
    beneficiaries
        .iter()
        .map(|b| b.allocation_percentage.as_decimal())
        .sum()
}
