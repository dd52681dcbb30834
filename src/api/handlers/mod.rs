//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod accounts;
pub mod beneficiaries;
pub mod health;
pub mod rewards;

pub use accounts::{account_list_handler, create_account_handler, get_account_handler};
pub use beneficiaries::{
    add_beneficiary_handler, get_beneficiary_handler, remove_beneficiary_handler,
};
pub use health::health_handler;
pub use rewards::reward_handler;
