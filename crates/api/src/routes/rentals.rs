use axum::routing::{get, put};
use axum::Router;

use crate::handlers::rental;
use crate::state::AppState;

/// Rental request routes mounted at `/rentals`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rental::list).post(rental::create))
        .route("/{id}", get(rental::get_by_id))
        .route("/{id}/status", put(rental::update_status))
}
