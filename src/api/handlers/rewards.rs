//! Handler for the reward endpoint.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::api::dto::reward::{RewardRequest, RewardResponse};
use crate::domain::entities::Dining;
use crate::error::AppError;
use crate::state::AppState;

/// Rewards the account linked to a dining's credit card.
///
/// # Endpoint
///
/// `POST /rewards`
///
/// # Request Body
///
/// ```json
/// {
///   "dining_amount": "100.00",
///   "credit_card_number": "1234123412341234",
///   "merchant_number": "1234567890",
///   "dining_date": "2024-10-31"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "confirmation_number": "GZ4AKBT27FQM",
///   "account_number": "123456789",
///   "amount": "8.00",
///   "distributions": [
///     { "beneficiary": "Annabelle", "percentage": "50%", "amount": "4.00" },
///     { "beneficiary": "Corgan", "percentage": "50%", "amount": "4.00" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request on malformed fields
/// - 404 Not Found if no account matches the card or no restaurant matches
///   the merchant number
/// - 409 Conflict if the account's allocations do not balance
pub async fn reward_handler(
    State(state): State<AppState>,
    Json(payload): Json<RewardRequest>,
) -> Result<Json<RewardResponse>, AppError> {
    payload.validate()?;

    let dining = match payload.dining_date {
        Some(date) => Dining::on_date(
            payload.dining_amount,
            payload.credit_card_number,
            payload.merchant_number,
            date,
        ),
        None => Dining::new(
            payload.dining_amount,
            payload.credit_card_number,
            payload.merchant_number,
        ),
    };

    let confirmation = state.reward_service.reward_account_for(dining).await?;
    Ok(Json(RewardResponse::from(confirmation)))
}
