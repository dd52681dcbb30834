pub mod account_service;
pub mod reward_service;

pub use account_service::AccountService;
pub use reward_service::RewardService;
