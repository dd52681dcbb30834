//! API route configuration.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::api::handlers::{
    account_list_handler, add_beneficiary_handler, create_account_handler, get_account_handler,
    get_beneficiary_handler, remove_beneficiary_handler, reward_handler,
};
use crate::state::AppState;

/// Account and reward resource routes.
///
/// # Endpoints
///
/// - `GET    /accounts`                              - List accounts
/// - `POST   /accounts`                              - Create an account
/// - `GET    /accounts/{id}`                         - Fetch one account
/// - `POST   /accounts/{id}/beneficiaries`           - Add a beneficiary
/// - `GET    /accounts/{id}/beneficiaries/{name}`    - Fetch one beneficiary
/// - `DELETE /accounts/{id}/beneficiaries/{name}`    - Remove a beneficiary
/// - `POST   /rewards`                               - Reward a dining
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts",
            get(account_list_handler).post(create_account_handler),
        )
        .route("/accounts/{id}", get(get_account_handler))
        .route(
            "/accounts/{id}/beneficiaries",
            post(add_beneficiary_handler),
        )
        .route(
            "/accounts/{id}/beneficiaries/{name}",
            get(get_beneficiary_handler).delete(remove_beneficiary_handler),
        )
        .route("/rewards", post(reward_handler))
}
