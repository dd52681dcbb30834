//! Application error type and its HTTP mapping.
//!
//! Every fallible path in the service converges on [`AppError`]. Handlers
//! return it directly; the [`IntoResponse`] impl renders a structured JSON
//! body and picks the status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;

/// Application-level error carrying an HTTP-facing category and a message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or invalid input. Maps to 400.
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced resource does not exist. Maps to 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request conflicts with current state. Maps to 409.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Unexpected failure. Maps to 500; details are logged, not exposed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn to_error_info(&self) -> ErrorInfo {
        match self {
            Self::Validation(msg) => ErrorInfo {
                code: "VALIDATION_ERROR",
                message: "Invalid request".to_string(),
                details: Some(msg.clone()),
            },
            Self::NotFound(msg) => ErrorInfo {
                code: "NOT_FOUND",
                message: msg.clone(),
                details: None,
            },
            Self::Conflict(msg) => ErrorInfo {
                code: "CONFLICT",
                message: msg.clone(),
                details: None,
            },
            Self::Internal(_) => ErrorInfo {
                code: "INTERNAL_ERROR",
                message: "Internal server error".to_string(),
                details: None,
            },
        }
    }
}

/// JSON error envelope: `{"error": {"code", "message", "details"}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal error");
        } else {
            tracing::debug!(error = %self, status = %status, "request failed");
        }
        let body = ErrorBody {
            error: self.to_error_info(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidAmount(_) | DomainError::InvalidPercentage(_) => {
                Self::Validation(err.to_string())
            }
            DomainError::AccountNotFound(_)
            | DomainError::RestaurantNotFound(_)
            | DomainError::BeneficiaryNotFound(_) => Self::NotFound(err.to_string()),
            DomainError::DuplicateBeneficiary(_) | DomainError::UnbalancedAllocations(_) => {
                Self::Conflict(err.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound("record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict("record already exists".to_string())
            }
            _ => {
                tracing::error!(error = %err, "database error");
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}
