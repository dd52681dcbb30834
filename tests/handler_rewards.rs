mod common;

use axum::routing::post;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use rewards_service::api::handlers::reward_handler;

/// Build a test server with the reward route.
fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/rewards", post(reward_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_reward_dining_splits_benefit(pool: PgPool) {
    let server = make_server(pool.clone());

    // Seeded: account 123456789 with card 1234123412341234, Annabelle and
    // Corgan at 50% each; AppleBees at 8%.
    let response = server
        .post("/rewards")
        .json(&json!({
            "dining_amount": "100.00",
            "credit_card_number": "1234123412341234",
            "merchant_number": "1234567890"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["account_number"], "123456789");
    assert_eq!(body["amount"], "8.00");
    assert_eq!(body["confirmation_number"].as_str().unwrap().len(), 12);

    let distributions = body["distributions"].as_array().unwrap();
    assert_eq!(distributions.len(), 2);
    assert_eq!(distributions[0]["beneficiary"], "Annabelle");
    assert_eq!(distributions[0]["amount"], "4.00");
    assert_eq!(distributions[1]["beneficiary"], "Corgan");
    assert_eq!(distributions[1]["amount"], "4.00");

    assert_eq!(common::count_rewards(&pool).await, 1);
}

#[sqlx::test]
async fn test_reward_residual_cent_lands_on_last_beneficiary(pool: PgPool) {
    let id = common::create_test_account(
        &pool,
        "987654321",
        "Three Way Split",
        Some("9999888877776666"),
    )
    .await;
    common::add_test_beneficiary(&pool, id, "A", "0.33", 0).await;
    common::add_test_beneficiary(&pool, id, "B", "0.33", 1).await;
    common::add_test_beneficiary(&pool, id, "C", "0.34", 2).await;

    let server = make_server(pool);

    // 8% of 12.50 is exactly 1.00 to distribute.
    let response = server
        .post("/rewards")
        .json(&json!({
            "dining_amount": "12.50",
            "credit_card_number": "9999888877776666",
            "merchant_number": "1234567890"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["amount"], "1.00");

    let distributions = body["distributions"].as_array().unwrap();
    assert_eq!(distributions[0]["amount"], "0.33");
    assert_eq!(distributions[1]["amount"], "0.33");
    assert_eq!(distributions[2]["amount"], "0.34");
}

#[sqlx::test]
async fn test_reward_unknown_card_not_found(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/rewards")
        .json(&json!({
            "dining_amount": "100.00",
            "credit_card_number": "0000000000000000",
            "merchant_number": "1234567890"
        }))
        .await;

    response.assert_status_not_found();
    assert_eq!(common::count_rewards(&pool).await, 0);
}

#[sqlx::test]
async fn test_reward_unknown_merchant_not_found(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/rewards")
        .json(&json!({
            "dining_amount": "100.00",
            "credit_card_number": "1234123412341234",
            "merchant_number": "0000000000"
        }))
        .await;

    response.assert_status_not_found();
    assert_eq!(common::count_rewards(&pool).await, 0);
}

#[sqlx::test]
async fn test_reward_invalid_card_is_bad_request(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/rewards")
        .json(&json!({
            "dining_amount": "100.00",
            "credit_card_number": "123",
            "merchant_number": "1234567890"
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_reward_malformed_amount_is_unprocessable(pool: PgPool) {
    let server = make_server(pool);

    // Three decimal places never reach the handler.
    let response = server
        .post("/rewards")
        .json(&json!({
            "dining_amount": "100.123",
            "credit_card_number": "1234123412341234",
            "merchant_number": "1234567890"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test]
async fn test_reward_with_explicit_dining_date(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/rewards")
        .json(&json!({
            "dining_amount": "50.00",
            "credit_card_number": "1234123412341234",
            "merchant_number": "1234567890",
            "dining_date": "2024-10-31"
        }))
        .await;

    response.assert_status_ok();

    let dining_date: chrono::NaiveDate =
        sqlx::query_scalar("SELECT dining_date FROM rewards LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(dining_date.to_string(), "2024-10-31");
}
