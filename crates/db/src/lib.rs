//! Data model and inventory store for CamQuest.
//!
//! - [`models`] holds the `Camera` and `RentalRequest` records and their DTOs.
//! - [`InventoryStore`] is the store contract used by the API layer.
//! - [`MemStore`] is the process-lifetime, in-memory implementation.

pub mod memory;
pub mod models;
pub mod seed;
pub mod store;

pub use memory::MemStore;
pub use store::{InventoryStore, StoreError};
