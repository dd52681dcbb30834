//! PostgreSQL implementations of the domain repository traits.

pub mod pg_account_repository;
pub mod pg_restaurant_repository;
pub mod pg_reward_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_restaurant_repository::PgRestaurantRepository;
pub use pg_reward_repository::PgRewardRepository;
