//! The notification dispatcher contract.

use async_trait::async_trait;
use camquest_core::rental::{format_currency, request_reference};
use camquest_db::models::camera::Camera;
use camquest_db::models::rental_request::RentalRequest;

/// Sends the "new rental request" notifications.
///
/// Returns whether delivery succeeded. Callers must not fail the rental
/// request when this returns `false`.
#[async_trait]
pub trait RentalNotifier: Send + Sync {
    async fn notify_rental_created(&self, rental: &RentalRequest, camera: &Camera) -> bool;
}

/// Fallback dispatcher used when SMTP is not configured: logs the request
/// summary and always reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl RentalNotifier for LogNotifier {
    async fn notify_rental_created(&self, rental: &RentalRequest, camera: &Camera) -> bool {
        tracing::info!(
            reference = %request_reference(rental.id),
            camera = %camera.name,
            customer = %rental.customer_name,
            email = %rental.customer_email,
            quantity = rental.quantity,
            total_price = %format_currency(rental.total_price),
            "Rental request received (email delivery not configured)",
        );
        true
    }
}
