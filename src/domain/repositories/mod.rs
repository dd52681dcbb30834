//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (ports) that abstract data
//! access operations. These traits are implemented by concrete repositories
//! in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AccountRepository`] - Accounts and their beneficiaries
//! - [`RestaurantRepository`] - Restaurant reference data
//! - [`RewardRepository`] - Reward confirmation persistence
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod account_repository;
pub mod restaurant_repository;
pub mod reward_repository;

pub use account_repository::AccountRepository;
pub use restaurant_repository::RestaurantRepository;
pub use reward_repository::RewardRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
#[cfg(test)]
pub use reward_repository::MockRewardRepository;
