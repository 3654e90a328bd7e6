//! In-memory [`InventoryStore`] backed by insertion-ordered maps.
//!
//! Both collections and both id sequences live in a single [`Inventory`]
//! behind one `RwLock`. Every mutation runs as a synchronous method on
//! `Inventory` while the write guard is held, so no `.await` can split a
//! reconciliation between its read and its write.

use async_trait::async_trait;
use camquest_core::rental::{can_reserve, status_change_delta, RentalStatus};
use camquest_core::types::DbId;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::camera::{Camera, CreateCamera, UpdateCamera};
use crate::models::rental_request::{CreateRentalRequest, RentalRequest};
use crate::store::{InventoryStore, StoreError};

// ---------------------------------------------------------------------------
// Inventory (lock-free core)
// ---------------------------------------------------------------------------

/// The collections and their id sequences.
#[derive(Debug)]
pub(crate) struct Inventory {
    cameras: IndexMap<DbId, Camera>,
    rentals: IndexMap<DbId, RentalRequest>,
    next_camera_id: DbId,
    next_rental_id: DbId,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            cameras: IndexMap::new(),
            rentals: IndexMap::new(),
            next_camera_id: 1,
            next_rental_id: 1,
        }
    }
}

impl Inventory {
    pub(crate) fn insert_camera(&mut self, input: CreateCamera) -> Camera {
        let id = self.next_camera_id;
        self.next_camera_id += 1;

        let camera = input.into_camera(id);
        self.cameras.insert(id, camera.clone());
        camera
    }

    fn update_camera(&mut self, id: DbId, patch: UpdateCamera) -> Option<Camera> {
        let camera = self.cameras.get_mut(&id)?;
        patch.apply_to(camera);
        Some(camera.clone())
    }

    fn delete_camera(&mut self, id: DbId) -> bool {
        self.cameras.shift_remove(&id).is_some()
    }

    fn insert_rental(&mut self, input: CreateRentalRequest) -> RentalRequest {
        let id = self.next_rental_id;
        self.next_rental_id += 1;

        let rental = input.into_rental(id, Utc::now());
        self.rentals.insert(id, rental.clone());

        // A request created as cancelled holds nothing; un-cancelling it
        // later takes the units through the status delta.
        if rental.status.releases_units() {
            tracing::debug!(
                rental_id = id,
                camera_id = rental.camera_id,
                "Rental created as cancelled, no units reserved",
            );
            return rental;
        }

        match self.cameras.get_mut(&rental.camera_id) {
            Some(camera) if can_reserve(camera.available_units, rental.quantity) => {
                camera.available_units -= rental.quantity;
                tracing::debug!(
                    rental_id = id,
                    camera_id = camera.id,
                    quantity = rental.quantity,
                    available_units = camera.available_units,
                    "Units reserved for rental request",
                );
            }
            Some(camera) => {
                tracing::warn!(
                    rental_id = id,
                    camera_id = camera.id,
                    quantity = rental.quantity,
                    available_units = camera.available_units,
                    "Not enough units at store write, inventory left unchanged",
                );
            }
            None => {
                tracing::warn!(
                    rental_id = id,
                    camera_id = rental.camera_id,
                    "Rental references a missing camera, inventory left unchanged",
                );
            }
        }

        rental
    }

    fn set_rental_status(&mut self, id: DbId, status: RentalStatus) -> Option<RentalRequest> {
        let rental = self.rentals.get_mut(&id)?;
        let delta = status_change_delta(rental.status, status, rental.quantity);

        if delta != 0 {
            match self.cameras.get_mut(&rental.camera_id) {
                Some(camera) => match camera.available_units.checked_add(delta) {
                    Some(units) => {
                        camera.available_units = units;
                        if units < 0 {
                            tracing::warn!(
                                rental_id = id,
                                camera_id = camera.id,
                                available_units = units,
                                "Available units went negative after status change",
                            );
                        }
                    }
                    None => {
                        tracing::warn!(
                            rental_id = id,
                            camera_id = camera.id,
                            available_units = camera.available_units,
                            delta,
                            "Unit adjustment would overflow, inventory left unchanged",
                        );
                    }
                },
                None => {
                    tracing::warn!(
                        rental_id = id,
                        camera_id = rental.camera_id,
                        "Camera missing during status change, inventory left unchanged",
                    );
                }
            }
        }

        tracing::debug!(
            rental_id = id,
            from = %rental.status,
            to = %status,
            delta,
            "Rental status changed",
        );

        rental.status = status;
        Some(rental.clone())
    }
}

// ---------------------------------------------------------------------------
// MemStore
// ---------------------------------------------------------------------------

/// Process-lifetime inventory store. Cheap to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: RwLock<Inventory>,
}

impl MemStore {
    /// An empty store; the first camera and the first rental both get id 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_inventory(inventory: Inventory) -> Self {
        Self {
            inner: RwLock::new(inventory),
        }
    }
}

#[async_trait]
impl InventoryStore for MemStore {
    async fn list_cameras(&self) -> Result<Vec<Camera>, StoreError> {
        let inv = self.inner.read().await;
        Ok(inv.cameras.values().cloned().collect())
    }

    async fn get_camera(&self, id: DbId) -> Result<Option<Camera>, StoreError> {
        let inv = self.inner.read().await;
        Ok(inv.cameras.get(&id).cloned())
    }

    async fn create_camera(&self, input: CreateCamera) -> Result<Camera, StoreError> {
        let mut inv = self.inner.write().await;
        Ok(inv.insert_camera(input))
    }

    async fn update_camera(
        &self,
        id: DbId,
        patch: UpdateCamera,
    ) -> Result<Option<Camera>, StoreError> {
        let mut inv = self.inner.write().await;
        Ok(inv.update_camera(id, patch))
    }

    async fn delete_camera(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inv = self.inner.write().await;
        Ok(inv.delete_camera(id))
    }

    async fn list_rental_requests(&self) -> Result<Vec<RentalRequest>, StoreError> {
        let inv = self.inner.read().await;
        Ok(inv.rentals.values().cloned().collect())
    }

    async fn get_rental_request(&self, id: DbId) -> Result<Option<RentalRequest>, StoreError> {
        let inv = self.inner.read().await;
        Ok(inv.rentals.get(&id).cloned())
    }

    async fn create_rental_request(
        &self,
        input: CreateRentalRequest,
    ) -> Result<RentalRequest, StoreError> {
        let mut inv = self.inner.write().await;
        Ok(inv.insert_rental(input))
    }

    async fn update_rental_request_status(
        &self,
        id: DbId,
        status: RentalStatus,
    ) -> Result<Option<RentalRequest>, StoreError> {
        let mut inv = self.inner.write().await;
        Ok(inv.set_rental_status(id, status))
    }
}
