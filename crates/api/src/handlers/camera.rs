//! Handlers for the `/cameras` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use camquest_core::catalog::CatalogFilter;
use camquest_core::error::CoreError;
use camquest_db::models::camera::{Camera, CreateCamera, UpdateCamera};

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, JsonBody};
use crate::state::AppState;

/// GET /api/cameras
///
/// Optional `category`, `availability`, and `search` query parameters
/// narrow the listing.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilter>,
) -> AppResult<Json<Vec<Camera>>> {
    let cameras = state.store.list_cameras().await?;
    Ok(Json(filter.apply(cameras)))
}

/// GET /api/cameras/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Camera>> {
    let id = parse_id(&raw_id, "camera")?;
    let camera = state
        .store
        .get_camera(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id,
        }))?;
    Ok(Json(camera))
}

/// POST /api/cameras
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCamera>,
) -> AppResult<(StatusCode, Json<Camera>)> {
    input.validate()?;

    let camera = state.store.create_camera(input).await?;

    tracing::info!(camera_id = camera.id, name = %camera.name, "Camera created");

    Ok((StatusCode::CREATED, Json(camera)))
}

/// PUT /api/cameras/{id}
///
/// Partial update: present fields overwrite stored ones without range
/// checks, so `availableUnits` may exceed `totalUnits` afterwards.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(patch): JsonBody<UpdateCamera>,
) -> AppResult<Json<Camera>> {
    let id = parse_id(&raw_id, "camera")?;
    let camera = state
        .store
        .update_camera(id, patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id,
        }))?;

    tracing::info!(
        camera_id = id,
        total_units = camera.total_units,
        available_units = camera.available_units,
        "Camera updated",
    );

    Ok(Json(camera))
}

/// DELETE /api/cameras/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id, "camera")?;
    let deleted = state.store.delete_camera(id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Camera",
            id,
        }));
    }

    tracing::info!(camera_id = id, "Camera deleted");

    Ok(StatusCode::NO_CONTENT)
}
