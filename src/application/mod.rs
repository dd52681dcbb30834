//! Application layer: use-case services orchestrating domain and ports.

pub mod services;

pub use services::{AccountService, RewardService};
