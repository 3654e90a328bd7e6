#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use camquest_api::config::ServerConfig;
use camquest_api::router::build_app_router;
use camquest_api::state::AppState;
use camquest_db::models::camera::Camera;
use camquest_db::models::rental_request::RentalRequest;
use camquest_db::{InventoryStore, MemStore};
use camquest_events::RentalNotifier;
use http_body_util::BodyExt;
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_sample_catalog: false,
        admin_email: "admin@camquest.local".to_string(),
    }
}

/// Notifier that forwards every notification to a channel so tests can
/// observe the spawned dispatch.
pub struct RecordingNotifier {
    tx: mpsc::UnboundedSender<(RentalRequest, Camera)>,
    succeed: bool,
}

#[async_trait]
impl RentalNotifier for RecordingNotifier {
    async fn notify_rental_created(&self, rental: &RentalRequest, camera: &Camera) -> bool {
        let _ = self.tx.send((rental.clone(), camera.clone()));
        self.succeed
    }
}

/// Everything a test needs: the router plus handles on its collaborators.
pub struct TestApp {
    pub store: Arc<dyn InventoryStore>,
    pub notifications: mpsc::UnboundedReceiver<(RentalRequest, Camera)>,
    state: AppState,
}

impl TestApp {
    /// A fresh router sharing this app's store and notifier.
    pub fn router(&self) -> Router {
        build_app_router(self.state.clone())
    }

    /// Same store and notifier, different server configuration.
    pub fn router_with_config(&self, config: ServerConfig) -> Router {
        let mut state = self.state.clone();
        state.config = Arc::new(config);
        build_app_router(state)
    }
}

/// Build the full application router over an empty store.
pub fn build_test_app() -> TestApp {
    build_test_app_with(MemStore::new(), true)
}

/// Build the full application router over `store`; `notify_ok` decides what
/// the recording notifier reports back.
pub fn build_test_app_with(store: MemStore, notify_ok: bool) -> TestApp {
    let (tx, rx) = mpsc::unbounded_channel();
    let store: Arc<dyn InventoryStore> = Arc::new(store);

    let state = AppState {
        store: Arc::clone(&store),
        notifier: Arc::new(RecordingNotifier {
            tx,
            succeed: notify_ok,
        }),
        config: Arc::new(test_config()),
    };

    TestApp {
        store,
        notifications: rx,
        state,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

pub fn camera_payload(name: &str, total: i32, available: i32) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": format!("{name} for action shots"),
        "category": "Sports Camera",
        "pricePerDay": 35.0,
        "totalUnits": total,
        "availableUnits": available,
        "specifications": ["4K Video Recording", "8-hour Battery Life"],
        "imageUrl": "https://example.com/camera.jpg"
    })
}

pub fn rental_payload(camera_id: i64, quantity: i32) -> serde_json::Value {
    serde_json::json!({
        "cameraId": camera_id,
        "customerName": "Grace Hopper",
        "customerEmail": "grace@example.com",
        "customerPhone": "555-0199",
        "startDate": "2025-06-01",
        "endDate": "2025-06-04T00:00:00.000Z",
        "quantity": quantity,
        "totalPrice": 105.0 * f64::from(quantity)
    })
}

/// POST a camera and return its id.
pub async fn create_camera(app: &TestApp, total: i32, available: i32) -> i64 {
    let response = post_json(
        app.router(),
        "/api/cameras",
        camera_payload("Veo Sports Camera", total, available),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Current `availableUnits` of a camera, read through the API.
pub async fn available_units(app: &TestApp, camera_id: i64) -> i64 {
    let response = get(app.router(), &format!("/api/cameras/{camera_id}")).await;
    body_json(response).await["availableUnits"]
        .as_i64()
        .unwrap()
}
