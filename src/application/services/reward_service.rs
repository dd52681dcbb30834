//! Reward processing use case.

use std::sync::Arc;

use crate::domain::entities::{Dining, RewardConfirmation};
use crate::domain::repositories::{AccountRepository, RestaurantRepository, RewardRepository};
use crate::domain::DomainError;
use crate::error::AppError;

/// Service that rewards an account for a dining transaction.
///
/// The flow is deterministic: match the dining's credit card to an account,
/// look up the restaurant's benefit rate, distribute the benefit across the
/// account's beneficiaries and persist the confirmed reward.
pub struct RewardService {
    accounts: Arc<dyn AccountRepository>,
    restaurants: Arc<dyn RestaurantRepository>,
    rewards: Arc<dyn RewardRepository>,
}

impl RewardService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        restaurants: Arc<dyn RestaurantRepository>,
        rewards: Arc<dyn RewardRepository>,
    ) -> Self {
        Self {
            accounts,
            restaurants,
            rewards,
        }
    }

    /// Rewards the account linked to the dining's credit card.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no account is linked to the credit card
    ///   or no restaurant matches the merchant number.
    /// - [`AppError::Conflict`] if the account's allocations do not balance.
    pub async fn reward_account_for(
        &self,
        dining: Dining,
    ) -> Result<RewardConfirmation, AppError> {
        let account = self
            .accounts
            .find_by_credit_card(&dining.credit_card_number)
            .await?
            .ok_or_else(|| {
                AppError::not_found("no account is linked to the dining credit card".to_string())
            })?;

        let restaurant = self
            .restaurants
            .find_by_merchant_number(&dining.merchant_number)
            .await?
            .ok_or_else(|| DomainError::RestaurantNotFound(dining.merchant_number.clone()))?;

        let benefit = restaurant.calculate_benefit_for(&dining);
        let contribution = account.make_contribution(benefit)?;
        let confirmation = self.rewards.confirm_reward(&contribution, &dining).await?;

        tracing::info!(
            confirmation_number = %confirmation.confirmation_number,
            account_number = %contribution.account_number,
            merchant_number = %dining.merchant_number,
            amount = %contribution.amount,
            "reward confirmed"
        );
        metrics::counter!("rewards_confirmed_total").increment(1);

        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Account, AccountContribution, Restaurant};
    use crate::domain::money::{MonetaryAmount, Percentage};
    use crate::domain::repositories::{
        MockAccountRepository, MockRestaurantRepository, MockRewardRepository,
    };

    fn donald_account() -> Account {
        let mut account = Account::new("123456789", "Keith and Keri Donald");
        account.entity_id = Some(1);
        account.credit_card_number = Some("1234123412341234".to_string());
        account
            .add_beneficiary("Annabelle", Some("50%".parse().unwrap()))
            .unwrap();
        account
            .add_beneficiary("Corgan", Some("50%".parse().unwrap()))
            .unwrap();
        account
    }

    fn applebees() -> Restaurant {
        Restaurant::new("1234567890", "AppleBees", "8%".parse().unwrap())
    }

    fn dining_of(amount: &str) -> Dining {
        Dining::new(amount.parse().unwrap(), "1234123412341234", "1234567890")
    }

    fn service(
        accounts: MockAccountRepository,
        restaurants: MockRestaurantRepository,
        rewards: MockRewardRepository,
    ) -> RewardService {
        RewardService::new(Arc::new(accounts), Arc::new(restaurants), Arc::new(rewards))
    }

    #[tokio::test]
    async fn rewards_account_for_dining() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_credit_card()
            .returning(|_| Ok(Some(donald_account())));

        let mut restaurants = MockRestaurantRepository::new();
        restaurants
            .expect_find_by_merchant_number()
            .returning(|_| Ok(Some(applebees())));

        let mut rewards = MockRewardRepository::new();
        rewards
            .expect_confirm_reward()
            .withf(|contribution: &AccountContribution, _| {
                contribution.amount == "8.00".parse::<MonetaryAmount>().unwrap()
                    && contribution.distribution("Annabelle").unwrap().amount
                        == "4.00".parse::<MonetaryAmount>().unwrap()
                    && contribution.distribution("Corgan").unwrap().amount
                        == "4.00".parse::<MonetaryAmount>().unwrap()
            })
            .returning(|contribution, _| {
                Ok(RewardConfirmation::new(
                    "CONF123456".to_string(),
                    contribution.clone(),
                ))
            });

        let confirmation = service(accounts, restaurants, rewards)
            .reward_account_for(dining_of("100.00"))
            .await
            .unwrap();

        assert_eq!(confirmation.confirmation_number, "CONF123456");
        assert_eq!(confirmation.account_contribution.account_number, "123456789");
    }

    #[tokio::test]
    async fn unknown_credit_card_is_not_found() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_find_by_credit_card().returning(|_| Ok(None));

        let restaurants = MockRestaurantRepository::new();
        let mut rewards = MockRewardRepository::new();
        rewards.expect_confirm_reward().never();

        let err = service(accounts, restaurants, rewards)
            .reward_account_for(dining_of("100.00"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unknown_merchant_is_not_found() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_credit_card()
            .returning(|_| Ok(Some(donald_account())));

        let mut restaurants = MockRestaurantRepository::new();
        restaurants
            .expect_find_by_merchant_number()
            .returning(|_| Ok(None));

        let mut rewards = MockRewardRepository::new();
        rewards.expect_confirm_reward().never();

        let err = service(accounts, restaurants, rewards)
            .reward_account_for(dining_of("100.00"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unbalanced_account_is_a_conflict() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_find_by_credit_card().returning(|_| {
            let mut account = Account::new("123456789", "Keith and Keri Donald");
            account
                .add_beneficiary("Annabelle", Some("40%".parse().unwrap()))
                .unwrap();
            Ok(Some(account))
        });

        let mut restaurants = MockRestaurantRepository::new();
        restaurants
            .expect_find_by_merchant_number()
            .returning(|_| Ok(Some(applebees())));

        let mut rewards = MockRewardRepository::new();
        rewards.expect_confirm_reward().never();

        let err = service(accounts, restaurants, rewards)
            .reward_account_for(dining_of("100.00"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn half_cent_rounds_away_from_zero() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_credit_card()
            .returning(|_| Ok(Some(donald_account())));

        let mut restaurants = MockRestaurantRepository::new();
        restaurants
            .expect_find_by_merchant_number()
            .returning(|_| Ok(Some(applebees())));

        let mut rewards = MockRewardRepository::new();
        rewards
            .expect_confirm_reward()
            // 8% of 100.63 is 8.0504, rounded to 8.05; the even split puts
            // 4.03 on Annabelle (4.025 rounds up) and 4.02 on Corgan.
            .withf(|contribution: &AccountContribution, _| {
                contribution.amount == "8.05".parse::<MonetaryAmount>().unwrap()
                    && contribution.distribution("Annabelle").unwrap().amount
                        == "4.03".parse::<MonetaryAmount>().unwrap()
                    && contribution.distribution("Corgan").unwrap().amount
                        == "4.02".parse::<MonetaryAmount>().unwrap()
            })
            .returning(|contribution, _| {
                Ok(RewardConfirmation::new(
                    "CONF000001".to_string(),
                    contribution.clone(),
                ))
            });

        service(accounts, restaurants, rewards)
            .reward_account_for(dining_of("100.63"))
            .await
            .unwrap();
    }
}
