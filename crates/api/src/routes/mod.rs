pub mod cameras;
pub mod health;
pub mod rentals;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cameras                     list (filterable), create
/// /cameras/{id}                get, update, delete
///
/// /rentals                     list, create
/// /rentals/{id}                get
/// /rentals/{id}/status         update status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cameras", cameras::router())
        .nest("/rentals", rentals::router())
}
