mod common;

use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;

use rewards_service::domain::entities::{AccountContribution, Dining, Distribution};
use rewards_service::domain::money::{MonetaryAmount, Percentage};
use rewards_service::domain::repositories::RewardRepository;
use rewards_service::infrastructure::persistence::PgRewardRepository;

fn amount(text: &str) -> MonetaryAmount {
    text.parse().unwrap()
}

fn donald_contribution() -> AccountContribution {
    AccountContribution::new(
        "123456789".to_string(),
        amount("8.00"),
        vec![
            Distribution {
                beneficiary: "Annabelle".to_string(),
                percentage: "50%".parse::<Percentage>().unwrap(),
                amount: amount("4.00"),
            },
            Distribution {
                beneficiary: "Corgan".to_string(),
                percentage: "50%".parse::<Percentage>().unwrap(),
                amount: amount("4.00"),
            },
        ],
    )
}

fn dining() -> Dining {
    Dining::new(amount("100.00"), "1234123412341234", "1234567890")
}

#[sqlx::test]
async fn test_confirm_reward_persists_a_row(pool: PgPool) {
    let repository = PgRewardRepository::new(Arc::new(pool.clone()));

    let confirmation = repository
        .confirm_reward(&donald_contribution(), &dining())
        .await
        .unwrap();

    assert_eq!(confirmation.confirmation_number.len(), 12);
    assert_eq!(confirmation.account_contribution.amount, amount("8.00"));

    let (stored_amount, stored_account): (Decimal, String) = sqlx::query_as(
        "SELECT reward_amount, account_number FROM rewards WHERE confirmation_number = $1",
    )
    .bind(&confirmation.confirmation_number)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(stored_amount, Decimal::new(800, 2));
    assert_eq!(stored_account, "123456789");
    assert_eq!(common::count_rewards(&pool).await, 1);
}

#[sqlx::test]
async fn test_confirmation_numbers_are_unique_per_reward(pool: PgPool) {
    let repository = PgRewardRepository::new(Arc::new(pool.clone()));

    let first = repository
        .confirm_reward(&donald_contribution(), &dining())
        .await
        .unwrap();
    let second = repository
        .confirm_reward(&donald_contribution(), &dining())
        .await
        .unwrap();

    assert_ne!(first.confirmation_number, second.confirmation_number);
    assert_eq!(common::count_rewards(&pool).await, 2);
}

#[sqlx::test]
async fn test_dining_details_are_recorded(pool: PgPool) {
    let repository = PgRewardRepository::new(Arc::new(pool.clone()));

    repository
        .confirm_reward(&donald_contribution(), &dining())
        .await
        .unwrap();

    let (dining_amount, merchant): (Decimal, String) = sqlx::query_as(
        "SELECT dining_amount, dining_merchant_number FROM rewards LIMIT 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(dining_amount, Decimal::new(10_000, 2));
    assert_eq!(merchant, "1234567890");
}
