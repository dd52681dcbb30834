//! PostgreSQL implementation of [`RewardRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::entities::{AccountContribution, Dining, RewardConfirmation};
use crate::domain::repositories::RewardRepository;
use crate::error::AppError;
use crate::utils::confirmation::generate_confirmation_number;

/// Attempts before giving up on a confirmation number collision.
const MAX_CONFIRMATION_ATTEMPTS: usize = 3;

pub struct PgRewardRepository {
    pool: Arc<PgPool>,
}

impl PgRewardRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn insert_reward(
        &self,
        confirmation_number: &str,
        contribution: &AccountContribution,
        dining: &Dining,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO rewards (
                confirmation_number, reward_amount, reward_date,
                account_number, dining_amount, dining_merchant_number, dining_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(confirmation_number)
        .bind(contribution.amount.as_decimal())
        .bind(Utc::now().date_naive())
        .bind(&contribution.account_number)
        .bind(dining.amount.as_decimal())
        .bind(&dining.merchant_number)
        .bind(dining.date)
        .execute(&*self.pool)
        .await
        .map(|_| ())
    }
}

#[async_trait]
impl RewardRepository for PgRewardRepository {
    async fn confirm_reward(
        &self,
        contribution: &AccountContribution,
        dining: &Dining,
    ) -> Result<RewardConfirmation, AppError> {
        for attempt in 1..=MAX_CONFIRMATION_ATTEMPTS {
            let confirmation_number = generate_confirmation_number();
            match self
                .insert_reward(&confirmation_number, contribution, dining)
                .await
            {
                Ok(()) => {
                    return Ok(RewardConfirmation::new(
                        confirmation_number,
                        contribution.clone(),
                    ));
                }
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                    tracing::warn!(attempt, "confirmation number collision, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Err(AppError::internal(
            "could not generate a unique confirmation number",
        ))
    }
}
