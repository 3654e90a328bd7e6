//! Handlers for the `/rentals` resource.
//!
//! Creating a request checks availability up front, lets the store reserve
//! the units, then hands the notification to a background task so SMTP
//! latency never reaches the customer.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camquest_core::error::CoreError;
use camquest_core::rental::{can_reserve, format_currency, request_reference, RentalStatus};
use camquest_db::models::camera::Camera;
use camquest_db::models::rental_request::{CreateRentalRequest, RentalRequest};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, JsonBody};
use crate::state::AppState;

/// GET /api/rentals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RentalRequest>>> {
    let rentals = state.store.list_rental_requests().await?;
    Ok(Json(rentals))
}

/// GET /api/rentals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<RentalRequest>> {
    let id = parse_id(&raw_id, "rental")?;
    let rental = state
        .store
        .get_rental_request(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rental request",
            id,
        }))?;
    Ok(Json(rental))
}

/// POST /api/rentals
///
/// Rejects unknown cameras (404) and requests larger than the camera's
/// available pool (400) before anything is stored. A request submitted as
/// `cancelled` holds no units, so it skips the availability check.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRentalRequest>,
) -> AppResult<(StatusCode, Json<RentalRequest>)> {
    input.validate()?;

    let camera = state
        .store
        .get_camera(input.camera_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id: input.camera_id,
        }))?;

    if input.holds_units() && !can_reserve(camera.available_units, input.quantity) {
        return Err(AppError::Core(CoreError::InsufficientUnits {
            available: camera.available_units,
        }));
    }

    let rental = state.store.create_rental_request(input).await?;

    tracing::info!(
        rental_id = rental.id,
        reference = %request_reference(rental.id),
        camera_id = rental.camera_id,
        customer = %rental.customer_name,
        email = %rental.customer_email,
        phone = %rental.customer_phone,
        start_date = %rental.start_date.format("%Y-%m-%d"),
        end_date = %rental.end_date.format("%Y-%m-%d"),
        quantity = rental.quantity,
        total_price = %format_currency(rental.total_price),
        status = %rental.status,
        "New rental request received",
    );

    dispatch_notification(&state, rental.clone(), camera);

    Ok((StatusCode::CREATED, Json(rental)))
}

/// PUT /api/rentals/{id}/status
///
/// Body: `{"status": "pending" | "approved" | "completed" | "cancelled"}`.
/// Moving into or out of `cancelled` returns or re-takes the units.
pub async fn update_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<RentalRequest>> {
    let id = parse_id(&raw_id, "rental")?;
    let status = parse_status_body(&body)?;

    let rental = state
        .store
        .update_rental_request_status(id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rental request",
            id,
        }))?;

    tracing::info!(rental_id = id, status = %status, "Rental status updated");

    Ok(Json(rental))
}

/// Extract a valid status from `{"status": ...}`; anything else is
/// `Invalid status`.
fn parse_status_body(body: &Value) -> AppResult<RentalStatus> {
    body.get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<RentalStatus>().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid status".into()))
}

/// Fire-and-forget notification. The outcome is logged only.
fn dispatch_notification(state: &AppState, rental: RentalRequest, camera: Camera) {
    let notifier = Arc::clone(&state.notifier);
    tokio::spawn(async move {
        if notifier.notify_rental_created(&rental, &camera).await {
            tracing::info!(rental_id = rental.id, "Rental notification delivered");
        } else {
            tracing::warn!(rental_id = rental.id, "Failed to deliver rental notification");
        }
    });
}
