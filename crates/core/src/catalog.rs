//! Storefront catalog filtering.
//!
//! Mirrors the filter bar of the storefront: a category selector, an
//! "available now" toggle, and a free-text search box. The sentinel value
//! `all` disables the category and availability filters.

use serde::Deserialize;

/// Sentinel meaning "do not filter on this field".
pub const FILTER_ALL: &str = "all";

/// Availability filter value keeping only cameras with free units.
pub const AVAILABILITY_AVAILABLE: &str = "available";

/// Query parameters accepted by the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub availability: Option<String>,
    pub search: Option<String>,
}

/// The fields of a catalog entry the filter looks at.
pub trait CatalogEntry {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
    fn available_units(&self) -> i32;
}

impl CatalogFilter {
    /// True when no parameter narrows the listing.
    pub fn is_empty(&self) -> bool {
        self.category_filter().is_none() && !self.available_only() && self.search_term().is_none()
    }

    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != FILTER_ALL)
    }

    fn available_only(&self) -> bool {
        self.availability.as_deref().map(str::trim) == Some(AVAILABILITY_AVAILABLE)
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `entry` passes every active filter.
    pub fn matches<E: CatalogEntry>(&self, entry: &E) -> bool {
        if let Some(category) = self.category_filter() {
            if entry.category() != category {
                return false;
            }
        }

        if self.available_only() && entry.available_units() <= 0 {
            return false;
        }

        if let Some(term) = self.search_term() {
            let in_name = entry.name().to_lowercase().contains(&term);
            let in_description = entry.description().to_lowercase().contains(&term);
            if !in_name && !in_description {
                return false;
            }
        }

        true
    }

    /// Keep only the entries matching this filter, preserving order.
    pub fn apply<E: CatalogEntry>(&self, entries: Vec<E>) -> Vec<E> {
        if self.is_empty() {
            return entries;
        }
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}
