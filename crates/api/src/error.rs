//! HTTP error type and its JSON rendering.
//!
//! Every failure leaves the server as `{"message": ..., "code": ...}`:
//!
//! | Source                        | Status | `code`               |
//! |-------------------------------|--------|----------------------|
//! | unknown record                | 404    | `NOT_FOUND`          |
//! | unknown route                 | 404    | `NOT_FOUND`          |
//! | payload validation            | 400    | `VALIDATION_ERROR`   |
//! | rental larger than stock      | 400    | `INSUFFICIENT_UNITS` |
//! | bad id, status or JSON body   | 400    | `BAD_REQUEST`        |
//! | store or internal failure     | 500    | `INTERNAL_ERROR`     |
//!
//! 500 bodies never carry the underlying cause; it is logged instead.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use camquest_core::error::CoreError;
use camquest_core::rental::insufficient_units_message;
use camquest_db::StoreError;
use serde_json::json;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    /// No route matches the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// Malformed id, status value or JSON body. The message is shown to the
    /// client as-is.
    #[error("{0}")]
    BadRequest(String),

    #[error("internal: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Status, machine code and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} not found"),
            ),
            AppError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No route for {path}"),
            ),
            AppError::Core(CoreError::Validation(reason)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", reason.clone())
            }
            AppError::Core(CoreError::InsufficientUnits { available }) => (
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_UNITS",
                insufficient_units_message(*available),
            ),
            AppError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", reason.clone())
            }
            AppError::Core(CoreError::Internal(_))
            | AppError::Store(_)
            | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, axum::Json(json!({ "message": message, "code": code }))).into_response()
    }
}
