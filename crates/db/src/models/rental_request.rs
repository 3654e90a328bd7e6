//! Rental request entity model and DTOs.

use camquest_core::error::CoreError;
use camquest_core::rental::RentalStatus;
use camquest_core::types::{DbId, Timestamp};
use camquest_core::validation::{validate_amount, validate_quantity, validate_required};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A customer's request to rent `quantity` units of one camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub id: DbId,
    pub camera_id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub quantity: i32,
    /// Computed by the client; the store never derives it.
    pub total_price: f64,
    pub status: RentalStatus,
    pub created_at: Timestamp,
}

/// DTO for submitting a rental request.
///
/// `start_date` / `end_date` accept RFC 3339 timestamps, `YYYY-MM-DD` dates
/// (midnight UTC), or epoch milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    pub camera_id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(deserialize_with = "coerce_timestamp")]
    pub start_date: Timestamp,
    #[serde(deserialize_with = "coerce_timestamp")]
    pub end_date: Timestamp,
    pub quantity: i32,
    pub total_price: f64,
    /// Defaults to `pending` if omitted.
    #[serde(default)]
    pub status: Option<RentalStatus>,
}

impl CreateRentalRequest {
    /// Check field shapes before the request reaches the store.
    ///
    /// Date ordering is deliberately not checked.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required("customerName", &self.customer_name)?;
        validate_required("customerEmail", &self.customer_email)?;
        validate_required("customerPhone", &self.customer_phone)?;
        validate_quantity(self.quantity)?;
        validate_amount("totalPrice", self.total_price)?;
        Ok(())
    }

    /// Whether the new request takes units out of the pool. One submitted
    /// as `cancelled` does not.
    pub fn holds_units(&self) -> bool {
        !self.status.unwrap_or_default().releases_units()
    }

    pub(crate) fn into_rental(self, id: DbId, created_at: Timestamp) -> RentalRequest {
        RentalRequest {
            id,
            camera_id: self.camera_id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            start_date: self.start_date,
            end_date: self.end_date,
            quantity: self.quantity,
            total_price: self.total_price,
            status: self.status.unwrap_or_default(),
            created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Date coercion
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum DateInput {
    Millis(i64),
    Text(String),
}

/// Parse a timestamp from text: RFC 3339, a naive date-time (taken as UTC),
/// or a bare date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn coerce_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match DateInput::deserialize(deserializer)? {
        DateInput::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
        DateInput::Text(raw) => {
            parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
        }
    }
}
