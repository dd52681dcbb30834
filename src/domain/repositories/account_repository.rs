//! Repository trait for account data access.

use crate::domain::entities::{Account, Beneficiary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for accounts and their beneficiaries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_account.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Finds an account by its database identity, beneficiaries included.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Account))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError>;

    /// Finds an account by its business number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_number(&self, number: &str) -> Result<Option<Account>, AppError>;

    /// Finds the account linked to a credit card.
    ///
    /// Used by the reward flow to match a dining transaction to an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_credit_card(
        &self,
        credit_card_number: &str,
    ) -> Result<Option<Account>, AppError>;

    /// Lists all accounts with their beneficiaries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Persists a new account and its beneficiaries, assigning its identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the account number (or linked
    /// credit card) is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, account: &Account) -> Result<Account, AppError>;

    /// Replaces the stored beneficiary set of an account.
    ///
    /// Applied atomically: either every beneficiary row is rewritten or none
    /// is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_beneficiaries(
        &self,
        account_id: i64,
        beneficiaries: &[Beneficiary],
    ) -> Result<(), AppError>;
}
