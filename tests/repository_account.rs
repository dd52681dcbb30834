mod common;

use std::sync::Arc;

use sqlx::PgPool;

use rewards_service::domain::entities::{Account, Beneficiary};
use rewards_service::domain::money::Percentage;
use rewards_service::domain::repositories::AccountRepository;
use rewards_service::error::AppError;
use rewards_service::infrastructure::persistence::PgAccountRepository;

fn repo(pool: PgPool) -> PgAccountRepository {
    PgAccountRepository::new(Arc::new(pool))
}

fn pct(text: &str) -> Percentage {
    text.parse().unwrap()
}

#[sqlx::test]
async fn test_find_by_number_loads_beneficiaries_in_order(pool: PgPool) {
    let account = repo(pool)
        .find_by_number("123456789")
        .await
        .unwrap()
        .expect("seeded account missing");

    assert_eq!(account.name, "Keith and Keri Donald");
    assert!(account.entity_id.is_some());

    let beneficiaries = account.beneficiaries();
    assert_eq!(beneficiaries.len(), 2);
    assert_eq!(beneficiaries[0].name, "Annabelle");
    assert_eq!(beneficiaries[0].allocation_percentage, pct("50%"));
    assert_eq!(beneficiaries[1].name, "Corgan");
    assert!(account.is_balanced());
}

#[sqlx::test]
async fn test_find_by_credit_card(pool: PgPool) {
    let account = repo(pool)
        .find_by_credit_card("1234123412341234")
        .await
        .unwrap()
        .expect("card should match the seeded account");

    assert_eq!(account.number, "123456789");
}

#[sqlx::test]
async fn test_find_missing_account_returns_none(pool: PgPool) {
    let repository = repo(pool);

    assert!(repository.find_by_id(999_999).await.unwrap().is_none());
    assert!(repository.find_by_number("000000000").await.unwrap().is_none());
    assert!(
        repository
            .find_by_credit_card("0000000000000000")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_save_and_reload_account(pool: PgPool) {
    let repository = repo(pool);

    let mut account = Account::new("987654321", "Dollie Mae");
    account.credit_card_number = Some("9999888877776666".to_string());
    account.add_beneficiary("Dollie", Some(pct("60%"))).unwrap();
    account.add_beneficiary("Mae", Some(pct("40%"))).unwrap();

    let saved = repository.save(&account).await.unwrap();
    let id = saved.entity_id.expect("save must assign an id");

    let reloaded = repository.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(reloaded.number, "987654321");
    assert_eq!(reloaded.credit_card_number.as_deref(), Some("9999888877776666"));
    assert_eq!(reloaded.beneficiaries().len(), 2);
    assert_eq!(reloaded.beneficiaries()[0].name, "Dollie");
    assert_eq!(reloaded.beneficiaries()[0].allocation_percentage, pct("60%"));
}

#[sqlx::test]
async fn test_save_duplicate_number_is_conflict(pool: PgPool) {
    let repository = repo(pool);

    let account = Account::new("123456789", "Copycat");
    let err = repository.save(&account).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[sqlx::test]
async fn test_update_beneficiaries_replaces_the_set(pool: PgPool) {
    let id = common::seeded_account_id(&pool).await;
    let repository = repo(pool);

    let replacement = vec![Beneficiary::new("Corgan", pct("100%"))];
    repository.update_beneficiaries(id, &replacement).await.unwrap();

    let reloaded = repository.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(reloaded.beneficiaries().len(), 1);
    assert_eq!(reloaded.beneficiaries()[0].name, "Corgan");
    assert_eq!(
        reloaded.beneficiaries()[0].allocation_percentage,
        pct("100%")
    );
}
