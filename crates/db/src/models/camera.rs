//! Camera entity model and DTOs.

use camquest_core::catalog::CatalogEntry;
use camquest_core::error::CoreError;
use camquest_core::types::DbId;
use camquest_core::validation::{validate_amount, validate_required, validate_unit_count};
use serde::{Deserialize, Serialize};

/// A rentable camera with pricing and inventory counters.
///
/// `available_units <= total_units` is expected but not enforced: admin
/// patches may set either counter freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_per_day: f64,
    pub total_units: i32,
    pub available_units: i32,
    pub specifications: Vec<String>,
    pub image_url: String,
}

/// DTO for creating a new camera. The caller sets `available_units`,
/// normally equal to `total_units`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCamera {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_per_day: f64,
    pub total_units: i32,
    pub available_units: i32,
    pub specifications: Vec<String>,
    pub image_url: String,
}

impl CreateCamera {
    /// Check field shapes before the record reaches the store.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required("name", &self.name)?;
        validate_required("category", &self.category)?;
        validate_amount("pricePerDay", self.price_per_day)?;
        validate_unit_count("totalUnits", self.total_units)?;
        validate_unit_count("availableUnits", self.available_units)?;
        Ok(())
    }

    pub(crate) fn into_camera(self, id: DbId) -> Camera {
        Camera {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            price_per_day: self.price_per_day,
            total_units: self.total_units,
            available_units: self.available_units,
            specifications: self.specifications,
            image_url: self.image_url,
        }
    }
}

/// DTO for patching a camera. Every field is optional and present fields
/// overwrite the stored value as-is. An `id` in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCamera {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_per_day: Option<f64>,
    pub total_units: Option<i32>,
    pub available_units: Option<i32>,
    pub specifications: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl UpdateCamera {
    /// Shallow-merge the present fields over `camera`.
    pub fn apply_to(self, camera: &mut Camera) {
        if let Some(name) = self.name {
            camera.name = name;
        }
        if let Some(description) = self.description {
            camera.description = description;
        }
        if let Some(category) = self.category {
            camera.category = category;
        }
        if let Some(price_per_day) = self.price_per_day {
            camera.price_per_day = price_per_day;
        }
        if let Some(total_units) = self.total_units {
            camera.total_units = total_units;
        }
        if let Some(available_units) = self.available_units {
            camera.available_units = available_units;
        }
        if let Some(specifications) = self.specifications {
            camera.specifications = specifications;
        }
        if let Some(image_url) = self.image_url {
            camera.image_url = image_url;
        }
    }
}

impl CatalogEntry for Camera {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn available_units(&self) -> i32 {
        self.available_units
    }
}
