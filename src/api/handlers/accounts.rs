//! Handlers for account endpoints.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::api::dto::account::{AccountResponse, CreateAccountRequest};
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all accounts with their beneficiaries.
///
/// # Endpoint
///
/// `GET /accounts`
pub async fn account_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = state.account_service.list_accounts().await?;
    let responses = accounts
        .iter()
        .map(AccountResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(responses))
}

/// Returns a single account.
///
/// # Endpoint
///
/// `GET /accounts/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no account has the given id.
pub async fn get_account_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = state.account_service.get_account(id).await?;
    Ok(Json(AccountResponse::try_from(&account)?))
}

/// Creates an account, optionally with its initial beneficiaries.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "number": "123456789",
///   "name": "Keith and Keri Donald",
///   "credit_card_number": "1234123412341234",
///   "beneficiaries": [
///     { "name": "Annabelle", "allocation_percentage": "50%" },
///     { "name": "Corgan", "allocation_percentage": "50%" }
///   ]
/// }
/// ```
///
/// # Response
///
/// 201 Created with a `Location` header pointing at the new account.
///
/// # Errors
///
/// - 400 Bad Request on malformed fields
/// - 409 Conflict on a duplicate account number or unbalanced allocations
pub async fn create_account_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut account = Account::new(payload.number, payload.name);
    account.credit_card_number = payload.credit_card_number;
    for item in payload.beneficiaries {
        account.add_beneficiary(item.name, item.allocation_percentage)?;
    }

    let created = state.account_service.create_account(account).await?;
    let response = AccountResponse::try_from(&created)?;
    let location = format!("/accounts/{}", response.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}
