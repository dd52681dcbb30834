//! Error kinds raised by the domain engine.
//!
//! All variants are value-like and recoverable by the caller. The domain
//! layer never logs-and-swallows and knows nothing about HTTP status codes;
//! translation to responses happens in [`crate::error::AppError`].

use thiserror::Error;

/// Failures produced by domain value types and the account aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed monetary literal, or one that exceeds the currency scale.
    #[error("invalid monetary amount: {0}")]
    InvalidAmount(String),

    /// Malformed percentage literal, or a value outside [0, 1].
    #[error("invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Referenced account does not exist.
    #[error("no such account: {0}")]
    AccountNotFound(String),

    /// No restaurant is registered for the dining's merchant number.
    #[error("no such restaurant: {0}")]
    RestaurantNotFound(String),

    /// The account has no beneficiary with the given name.
    #[error("no beneficiary named '{0}'")]
    BeneficiaryNotFound(String),

    /// A beneficiary with the given name already exists on the account.
    #[error("beneficiary '{0}' already exists")]
    DuplicateBeneficiary(String),

    /// A mutation or distribution would violate the allocation invariant
    /// (beneficiary percentages must total exactly 100% or 0%).
    #[error("unbalanced allocations: {0}")]
    UnbalancedAllocations(String),
}
