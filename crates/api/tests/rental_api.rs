//! Integration tests for the `/api/rentals` resource.
//!
//! Covers unit reservation on creation, the availability check, status
//! reconciliation through the HTTP surface, and notification dispatch.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::Response;
use camquest_db::InventoryStore;
use common::{available_units, body_json, get, post_json, put_json, rental_payload};
use serde_json::json;

async fn set_status(app: &common::TestApp, rental_id: i64, status: &str) -> Response {
    put_json(
        app.router(),
        &format!("/api/rentals/{rental_id}/status"),
        json!({ "status": status }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rental_reserves_units_and_returns_pending() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 8, 5).await;

    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 2)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["cameraId"], camera_id);
    assert_eq!(json["status"], "pending");
    assert_eq!(json["quantity"], 2);
    assert!(json["createdAt"].is_string());
    assert_eq!(available_units(&app, camera_id).await, 3);
}

#[tokio::test]
async fn create_rental_accepts_epoch_millis_dates() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 2, 2).await;
    let mut payload = rental_payload(camera_id, 1);
    payload["startDate"] = json!(1_748_736_000_000_i64);
    payload["endDate"] = json!(1_748_995_200_000_i64);

    let response = post_json(app.router(), "/api/rentals", payload).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["startDate"].as_str().unwrap().starts_with("2025-06-01"));
}

#[tokio::test]
async fn quantity_above_available_is_rejected_without_side_effects() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 4, 2).await;

    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 3)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INSUFFICIENT_UNITS");
    assert_eq!(
        json["message"],
        "Not enough units available. Only 2 units left."
    );
    assert_eq!(available_units(&app, camera_id).await, 2);
    assert!(app.store.list_rental_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn rental_for_missing_camera_returns_404() {
    let app = common::build_test_app();

    let response = post_json(app.router(), "/api/rentals", rental_payload(42, 1)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Camera not found"
    );
    assert!(app.store.list_rental_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn zero_quantity_is_a_validation_error() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 2, 2).await;

    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 0)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(available_units(&app, camera_id).await, 2);
}

#[tokio::test]
async fn blank_customer_email_is_a_validation_error() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 2, 2).await;
    let mut payload = rental_payload(camera_id, 1);
    payload["customerEmail"] = json!("");

    let response = post_json(app.router(), "/api/rentals", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_and_get_rentals() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 5, 5).await;
    post_json(app.router(), "/api/rentals", rental_payload(camera_id, 1)).await;
    post_json(app.router(), "/api/rentals", rental_payload(camera_id, 2)).await;

    let list = body_json(get(app.router(), "/api/rentals").await).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[1]["quantity"], 2);

    let response = get(app.router(), "/api/rentals/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["quantity"], 2);
}

#[tokio::test]
async fn missing_rental_returns_404_and_bad_id_400() {
    let app = common::build_test_app();

    let response = get(app.router(), "/api/rentals/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Rental request not found"
    );

    let response = get(app.router(), "/api/rentals/five").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid rental ID");

    let response = set_status(&app, 5, "approved").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status reconciliation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn single_unit_cancel_and_reapprove() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 1, 1).await;

    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 1)).await;
    let rental_id = body_json(response).await["id"].as_i64().unwrap();
    assert_eq!(available_units(&app, camera_id).await, 0);

    // A second customer cannot book the same unit.
    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 1)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = set_status(&app, rental_id, "cancelled").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "cancelled");
    assert_eq!(available_units(&app, camera_id).await, 1);

    let response = set_status(&app, rental_id, "approved").await;
    assert_eq!(body_json(response).await["status"], "approved");
    assert_eq!(available_units(&app, camera_id).await, 0);
}

#[tokio::test]
async fn approve_and_complete_leave_inventory_alone() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 4, 4).await;
    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 3)).await;
    let rental_id = body_json(response).await["id"].as_i64().unwrap();

    for status in ["approved", "completed", "pending"] {
        let response = set_status(&app, rental_id, status).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(available_units(&app, camera_id).await, 1);
    }
}

#[tokio::test]
async fn rental_submitted_as_cancelled_reserves_nothing() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 3, 3).await;
    let mut payload = rental_payload(camera_id, 2);
    payload["status"] = json!("cancelled");

    let response = post_json(app.router(), "/api/rentals", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let rental = body_json(response).await;
    assert_eq!(rental["status"], "cancelled");
    assert_eq!(available_units(&app, camera_id).await, 3);

    let rental_id = rental["id"].as_i64().unwrap();
    set_status(&app, rental_id, "pending").await;
    assert_eq!(available_units(&app, camera_id).await, 1);
}

#[tokio::test]
async fn cancelling_against_a_saturated_pool_succeeds() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 5, 5).await;
    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 2)).await;
    let rental_id = body_json(response).await["id"].as_i64().unwrap();

    put_json(
        app.router(),
        &format!("/api/cameras/{camera_id}"),
        json!({ "availableUnits": i32::MAX }),
    )
    .await;

    let response = set_status(&app, rental_id, "cancelled").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "cancelled");
    assert_eq!(available_units(&app, camera_id).await, i64::from(i32::MAX));
}

#[tokio::test]
async fn invalid_status_is_rejected_and_changes_nothing() {
    let app = common::build_test_app();
    let camera_id = common::create_camera(&app, 2, 2).await;
    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 1)).await;
    let rental_id = body_json(response).await["id"].as_i64().unwrap();

    for body in [json!({ "status": "shipped" }), json!({})] {
        let response = put_json(
            app.router(),
            &format!("/api/rentals/{rental_id}/status"),
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Invalid status");
    }

    let rental = body_json(get(app.router(), &format!("/api/rentals/{rental_id}")).await).await;
    assert_eq!(rental["status"], "pending");
    assert_eq!(available_units(&app, camera_id).await, 1);
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creating_a_rental_notifies_with_rental_and_camera() {
    let mut app = common::build_test_app();
    let camera_id = common::create_camera(&app, 3, 3).await;

    post_json(app.router(), "/api/rentals", rental_payload(camera_id, 2)).await;

    let (rental, camera) = tokio::time::timeout(Duration::from_secs(2), app.notifications.recv())
        .await
        .expect("notification should be dispatched")
        .expect("channel open");
    assert_eq!(rental.quantity, 2);
    assert_eq!(rental.customer_email, "grace@example.com");
    assert_eq!(camera.id, camera_id);
}

#[tokio::test]
async fn failed_notification_does_not_fail_the_request() {
    let mut app = common::build_test_app_with(camquest_db::MemStore::new(), false);
    let camera_id = common::create_camera(&app, 3, 3).await;

    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 1)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let received = tokio::time::timeout(Duration::from_secs(2), app.notifications.recv()).await;
    assert!(matches!(received, Ok(Some(_))));
    assert_eq!(app.store.list_rental_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn rejected_rental_sends_no_notification() {
    let mut app = common::build_test_app();
    let camera_id = common::create_camera(&app, 1, 0).await;

    let response = post_json(app.router(), "/api/rentals", rental_payload(camera_id, 1)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(app.notifications.try_recv().is_err());
}
