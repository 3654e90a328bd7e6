//! The inventory store contract.
//!
//! Callers hold an `Arc<dyn InventoryStore>` and never see the underlying
//! collections, so a durable backend can replace [`MemStore`](crate::MemStore)
//! without touching handlers.

use async_trait::async_trait;
use camquest_core::rental::RentalStatus;
use camquest_core::types::DbId;

use crate::models::camera::{Camera, CreateCamera, UpdateCamera};
use crate::models::rental_request::{CreateRentalRequest, RentalRequest};

/// Error type for store backends.
///
/// The in-memory store never fails; durable backends report I/O and
/// driver failures through [`StoreError::Backend`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Authoritative holder of cameras and rental requests.
///
/// Operations that touch both collections (rental creation and status
/// changes) are atomic: the camera's `available_units` and the rental
/// record are updated together or not at all.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    // -----------------------------------------------------------------------
    // Cameras
    // -----------------------------------------------------------------------

    /// All cameras in insertion order.
    async fn list_cameras(&self) -> Result<Vec<Camera>, StoreError>;

    async fn get_camera(&self, id: DbId) -> Result<Option<Camera>, StoreError>;

    /// Store a new camera under the next id. Ids are never reused.
    async fn create_camera(&self, input: CreateCamera) -> Result<Camera, StoreError>;

    /// Shallow-merge `patch` over the stored camera. No clamping.
    async fn update_camera(
        &self,
        id: DbId,
        patch: UpdateCamera,
    ) -> Result<Option<Camera>, StoreError>;

    /// Hard delete. Returns whether the camera existed. Rental requests
    /// referencing it are left as they are.
    async fn delete_camera(&self, id: DbId) -> Result<bool, StoreError>;

    // -----------------------------------------------------------------------
    // Rental requests
    // -----------------------------------------------------------------------

    /// All rental requests in insertion order.
    async fn list_rental_requests(&self) -> Result<Vec<RentalRequest>, StoreError>;

    async fn get_rental_request(&self, id: DbId) -> Result<Option<RentalRequest>, StoreError>;

    /// Store a new request (status defaults to `pending`, `created_at` is
    /// now), then take `quantity` units from the camera if it exists and has
    /// enough. Otherwise the request is kept and inventory is untouched.
    async fn create_rental_request(
        &self,
        input: CreateRentalRequest,
    ) -> Result<RentalRequest, StoreError>;

    /// Change a request's status, returning units to the camera when it
    /// enters `cancelled` and taking them again when it leaves `cancelled`.
    async fn update_rental_request_status(
        &self,
        id: DbId,
        status: RentalStatus,
    ) -> Result<Option<RentalRequest>, StoreError>;
}
