//! Handlers for beneficiary endpoints.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::api::dto::account::BeneficiaryResponse;
use crate::api::dto::beneficiary::{AddBeneficiaryRequest, RemoveBeneficiaryRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one beneficiary of an account.
///
/// # Endpoint
///
/// `GET /accounts/{id}/beneficiaries/{name}`
///
/// # Errors
///
/// Returns 404 Not Found if the account or beneficiary does not exist.
pub async fn get_beneficiary_handler(
    State(state): State<AppState>,
    Path((id, name)): Path<(i64, String)>,
) -> Result<Json<BeneficiaryResponse>, AppError> {
    let beneficiary = state.account_service.get_beneficiary(id, &name).await?;
    Ok(Json(BeneficiaryResponse::from(&beneficiary)))
}

/// Adds a beneficiary to an account.
///
/// The optional `rebalancing` map carries new allocations for the existing
/// beneficiaries, so a fully allocated account can free up the newcomer's
/// share in the same request.
///
/// # Endpoint
///
/// `POST /accounts/{id}/beneficiaries`
///
/// # Response
///
/// 201 Created with a `Location` header pointing at the new beneficiary.
///
/// # Errors
///
/// - 404 Not Found if the account or a rebalancing key does not exist
/// - 409 Conflict on a duplicate name or an allocation set that does not
///   total 100% or 0% after the addition
pub async fn add_beneficiary_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AddBeneficiaryRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let account = state
        .account_service
        .add_beneficiary(
            id,
            &payload.name,
            payload.allocation_percentage,
            &payload.rebalancing,
        )
        .await?;
    let beneficiary = account.beneficiary(&payload.name)?;

    let location = format!("/accounts/{}/beneficiaries/{}", id, payload.name);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BeneficiaryResponse::from(beneficiary)),
    ))
}

/// Removes a beneficiary from an account.
///
/// The optional JSON body carries a rebalancing map redistributing the freed
/// allocation among the remaining beneficiaries.
///
/// # Endpoint
///
/// `DELETE /accounts/{id}/beneficiaries/{name}`
///
/// # Response
///
/// 204 No Content.
///
/// # Errors
///
/// - 404 Not Found if the account or beneficiary does not exist
/// - 409 Conflict if the rebalanced allocations do not total 100% or 0%
pub async fn remove_beneficiary_handler(
    State(state): State<AppState>,
    Path((id, name)): Path<(i64, String)>,
    body: Option<Json<RemoveBeneficiaryRequest>>,
) -> Result<StatusCode, AppError> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    state
        .account_service
        .remove_beneficiary(id, &name, &payload.rebalancing)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
