//! Repository trait for reward confirmations.

use crate::domain::entities::{AccountContribution, Dining, RewardConfirmation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisting reward confirmations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRewardRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RewardRepository: Send + Sync {
    /// Persists a reward for the given contribution and dining, returning a
    /// confirmation with a unique confirmation number.
    ///
    /// Writes exactly one row per successful call; idempotency on retry is
    /// the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn confirm_reward(
        &self,
        contribution: &AccountContribution,
        dining: &Dining,
    ) -> Result<RewardConfirmation, AppError>;
}
