#![allow(dead_code)]

use rewards_service::application::{AccountService, RewardService};
use rewards_service::infrastructure::persistence::{
    PgAccountRepository, PgRestaurantRepository, PgRewardRepository,
};
use rewards_service::state::AppState;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::Arc;

/// Wires real Postgres repositories into an [`AppState`] for handler tests.
pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let accounts = Arc::new(PgAccountRepository::new(pool.clone()));
    let restaurants = Arc::new(PgRestaurantRepository::new(pool.clone()));
    let rewards = Arc::new(PgRewardRepository::new(pool));

    let account_service = Arc::new(AccountService::new(accounts.clone()));
    let reward_service = Arc::new(RewardService::new(accounts, restaurants, rewards));

    AppState::new(account_service, reward_service)
}

/// Id of the account seeded by migrations (number 123456789).
pub async fn seeded_account_id(pool: &PgPool) -> i64 {
    account_id_by_number(pool, "123456789").await
}

pub async fn account_id_by_number(pool: &PgPool, number: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM accounts WHERE number = $1")
        .bind(number)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_account(
    pool: &PgPool,
    number: &str,
    name: &str,
    credit_card_number: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO accounts (number, name, credit_card_number) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(number)
    .bind(name)
    .bind(credit_card_number)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn add_test_beneficiary(
    pool: &PgPool,
    account_id: i64,
    name: &str,
    allocation: &str,
    position: i32,
) {
    sqlx::query(
        "INSERT INTO account_beneficiaries (account_id, name, allocation, position) VALUES ($1, $2, $3, $4)",
    )
    .bind(account_id)
    .bind(name)
    .bind(Decimal::from_str(allocation).unwrap())
    .bind(position)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_restaurant(
    pool: &PgPool,
    merchant_number: &str,
    name: &str,
    benefit: &str,
) {
    sqlx::query(
        "INSERT INTO restaurants (merchant_number, name, benefit_percentage) VALUES ($1, $2, $3)",
    )
    .bind(merchant_number)
    .bind(name)
    .bind(Decimal::from_str(benefit).unwrap())
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_rewards(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM rewards")
        .fetch_one(pool)
        .await
        .unwrap()
}
