//! Account management use cases.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Account, Beneficiary};
use crate::domain::money::Percentage;
use crate::domain::repositories::AccountRepository;
use crate::domain::DomainError;
use crate::error::AppError;

/// Service for account and beneficiary management.
///
/// Entities enforce their own invariants; the service's job is to load,
/// mutate and persist them, and to refuse persisting an account whose
/// allocations do not balance.
pub struct AccountService {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Returns all accounts with their beneficiaries.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.accounts.list().await
    }

    /// Returns the account with the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such account exists.
    pub async fn get_account(&self, id: i64) -> Result<Account, AppError> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::AccountNotFound(id.to_string()).into())
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the allocations do not balance or
    /// the account number is already taken.
    pub async fn create_account(&self, account: Account) -> Result<Account, AppError> {
        if !account.is_balanced() {
            return Err(DomainError::UnbalancedAllocations(format!(
                "allocations for account '{}' must total 100% or 0%",
                account.number
            ))
            .into());
        }
        let created = self.accounts.save(&account).await?;
        tracing::info!(account_number = %created.number, "account created");
        Ok(created)
    }

    /// Returns a single beneficiary of an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account or the beneficiary does
    /// not exist.
    pub async fn get_beneficiary(
        &self,
        account_id: i64,
        name: &str,
    ) -> Result<Beneficiary, AppError> {
        let account = self.get_account(account_id).await?;
        let beneficiary = account.beneficiary(name)?;
        Ok(beneficiary.clone())
    }

    /// Adds a beneficiary to an account and persists the new set.
    ///
    /// With no explicit allocation the first beneficiary receives 100% and
    /// any later one 0%, so the account stays balanced. A non-zero allocation
    /// on an already fully allocated account needs a rebalancing map freeing
    /// up the share from the existing beneficiaries; an addition that leaves
    /// the account unbalanced is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account or a rebalancing key
    /// does not exist, and [`AppError::Conflict`] on a duplicate name or an
    /// unbalanced resulting allocation set.
    pub async fn add_beneficiary(
        &self,
        account_id: i64,
        name: &str,
        allocation: Option<Percentage>,
        rebalancing: &HashMap<String, Percentage>,
    ) -> Result<Account, AppError> {
        let mut account = self.get_account(account_id).await?;
        account.add_beneficiary_with_rebalancing(name, allocation, rebalancing)?;
        if !account.is_balanced() {
            return Err(DomainError::UnbalancedAllocations(format!(
                "adding '{name}' would leave allocations unbalanced"
            ))
            .into());
        }
        self.accounts
            .update_beneficiaries(account_id, account.beneficiaries())
            .await?;
        tracing::info!(account_number = %account.number, beneficiary = %name, "beneficiary added");
        Ok(account)
    }

    /// Removes a beneficiary, redistributing its allocation per the
    /// rebalancing map, and persists the new set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account or beneficiary does not
    /// exist, and [`AppError::Conflict`] if the rebalanced allocations do
    /// not total 100% or 0%.
    pub async fn remove_beneficiary(
        &self,
        account_id: i64,
        name: &str,
        rebalancing: &HashMap<String, Percentage>,
    ) -> Result<(), AppError> {
        let mut account = self.get_account(account_id).await?;
        account.remove_beneficiary(name, rebalancing)?;
        self.accounts
            .update_beneficiaries(account_id, account.beneficiaries())
            .await?;
        tracing::info!(account_number = %account.number, beneficiary = %name, "beneficiary removed");
        Ok(())
    }
}
