//! Request handlers for the storefront resources.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers validate payloads, delegate to the [`InventoryStore`] held in
//! state, and map errors via [`AppError`].
//!
//! [`InventoryStore`]: camquest_db::InventoryStore
//! [`AppError`]: crate::error::AppError

pub mod camera;
pub mod rental;
