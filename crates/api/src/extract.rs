//! Request extractors that report failures through [`AppError`].

use axum::extract::FromRequest;
use camquest_core::types::DbId;

use crate::error::{AppError, AppResult};

/// `axum::Json` whose rejections become 400 `BAD_REQUEST` responses in the
/// standard error body instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Parse a numeric path id, rejecting anything else with
/// `Invalid <entity> ID`.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<DbId> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {entity} ID")))
}
