//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::{AccountService, RewardService};

/// Application state shared across handlers.
///
/// Cheap to clone; all services are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub reward_service: Arc<RewardService>,
}

impl AppState {
    pub fn new(account_service: Arc<AccountService>, reward_service: Arc<RewardService>) -> Self {
        Self {
            account_service,
            reward_service,
        }
    }
}
