use std::sync::Arc;

use camquest_db::InventoryStore;
use camquest_events::RentalNotifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Authoritative camera and rental request store.
    pub store: Arc<dyn InventoryStore>,
    /// Dispatcher for new-rental notifications.
    pub notifier: Arc<dyn RentalNotifier>,
    /// Server configuration; the router reads CORS and timeout settings
    /// from here.
    pub config: Arc<ServerConfig>,
}
