//! Core domain entities for the rewards data model.
//!
//! # Entity Types
//!
//! - [`Account`] - Aggregate root owning [`Beneficiary`] allocations
//! - [`Restaurant`] - Merchant with a benefit rate
//! - [`Dining`] - An immutable dining transaction
//! - [`AccountContribution`] / [`RewardConfirmation`] - Reward outcomes
//!
//! The account aggregate carries the allocation invariant; the other types
//! are immutable records. All entities include unit tests demonstrating
//! their construction and behavior.

pub mod account;
pub mod dining;
pub mod restaurant;
pub mod reward;

pub use account::{Account, Beneficiary};
pub use dining::Dining;
pub use restaurant::Restaurant;
pub use reward::{AccountContribution, Distribution, RewardConfirmation};
