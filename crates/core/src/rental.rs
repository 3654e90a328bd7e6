//! Rental request lifecycle: status values, inventory reconciliation, and
//! the display helpers used in notifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Milliseconds in one calendar day (UTC, no DST).
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Prefix of the human-facing rental reference number.
pub const REFERENCE_PREFIX: &str = "RNT-";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a rental request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Cancelled,
}

/// All valid status values, in lifecycle order.
pub const VALID_STATUSES: &[RentalStatus] = &[
    RentalStatus::Pending,
    RentalStatus::Approved,
    RentalStatus::Completed,
    RentalStatus::Cancelled,
];

impl RentalStatus {
    /// Wire representation (`"pending"`, `"approved"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Capitalized label for emails and logs (`"Pending"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether units held by a request in this status are back in the pool.
    pub fn releases_units(self) -> bool {
        self == Self::Cancelled
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VALID_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation("Invalid status".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Signed change to a camera's `available_units` caused by moving a request
/// holding `quantity` units from `from` to `to`.
///
/// Entering `cancelled` returns the units to the pool (`+quantity`), leaving
/// it takes them out again (`-quantity`). Every other transition is neutral.
pub fn status_change_delta(from: RentalStatus, to: RentalStatus, quantity: i32) -> i32 {
    match (from.releases_units(), to.releases_units()) {
        (false, true) => quantity,
        (true, false) => -quantity,
        _ => 0,
    }
}

/// Whether a new request for `quantity` units can be taken out of a pool
/// that currently has `available` units.
pub fn can_reserve(available: i32, quantity: i32) -> bool {
    available >= quantity
}

/// Message returned to customers when the pool is too small.
pub fn insufficient_units_message(available: i32) -> String {
    format!("Not enough units available. Only {available} units left.")
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Human-facing reference for a rental request, e.g. `RNT-0042`.
pub fn request_reference(id: DbId) -> String {
    format!("{REFERENCE_PREFIX}{id:04}")
}

/// Number of billable days between `start` and `end`: partial days round
/// up and the minimum is one day.
pub fn rental_days(start: Timestamp, end: Timestamp) -> i64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 1;
    }
    ((millis + DAY_MS - 1) / DAY_MS).max(1)
}

/// Format an amount as US dollars with two decimals (`$35.00`).
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// `"1 day"` / `"3 days"` style pluralization for notification text.
pub fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
