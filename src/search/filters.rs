//! Typed filter bags and per-entity match predicates.
//!
//! Raw query-string values go through the `*_filter` helpers before they
//! reach a predicate. The policy for sloppy input is uniform: a blank value
//! after trimming is "not supplied", a numeric value that fails to parse is
//! "not supplied", and the category sentinel `"All Categories"` is "not
//! supplied". A well-formed value that names no known enum variant still
//! filters (and matches nothing), it is not silently dropped.
//!
//! Each supplied filter ANDs with the text match and with every other
//! supplied filter.

use std::collections::HashMap;
use std::str::FromStr;

use crate::catalog::types::{Demand, Product, Service};

use super::text::matches_listing;

/// Sentinel the category picker sends for "no category selected".
const ALL_CATEGORIES: &str = "all categories";

/// Blank-after-trim means not supplied; everything else is upper-cased for
/// the enum-name comparison.
pub fn enum_filter(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_uppercase())
}

/// Like `enum_filter`, with the "All Categories" sentinel also treated as
/// not supplied.
pub fn category_filter(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return None;
    }
    enum_filter(Some(trimmed))
}

/// Malformed numbers are not supplied, never "match nothing".
pub fn numeric_filter<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw?.trim().parse().ok()
}

/// Trimmed free-text filter value (experience).
pub fn text_filter(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductFilters {
    pub category: Option<String>,
    pub hall: Option<String>,
    pub product_type: Option<String>,
    pub status: Option<String>,
    /// Lower bound; the implicit upper bound is the maximum condition value.
    pub min_condition: Option<u8>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilters {
    /// Echo of the supplied filters for the response envelope.
    pub fn applied(&self) -> HashMap<String, String> {
        let mut out = HashMap::new();
        if let Some(v) = &self.category {
            out.insert("category".to_string(), v.clone());
        }
        if let Some(v) = &self.hall {
            out.insert("hall".to_string(), v.clone());
        }
        if let Some(v) = &self.product_type {
            out.insert("type".to_string(), v.clone());
        }
        if let Some(v) = &self.status {
            out.insert("status".to_string(), v.clone());
        }
        if let Some(v) = self.min_condition {
            out.insert("condition".to_string(), v.to_string());
        }
        if let Some(v) = self.min_price {
            out.insert("minPrice".to_string(), v.to_string());
        }
        if let Some(v) = self.max_price {
            out.insert("maxPrice".to_string(), v.to_string());
        }
        out
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ServiceFilters {
    pub category: Option<String>,
    pub hall: Option<String>,
    pub experience: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ServiceFilters {
    pub fn applied(&self) -> HashMap<String, String> {
        let mut out = HashMap::new();
        if let Some(v) = &self.category {
            out.insert("category".to_string(), v.clone());
        }
        if let Some(v) = &self.hall {
            out.insert("hall".to_string(), v.clone());
        }
        if let Some(v) = &self.experience {
            out.insert("experience".to_string(), v.clone());
        }
        if let Some(v) = self.min_price {
            out.insert("minPrice".to_string(), v.to_string());
        }
        if let Some(v) = self.max_price {
            out.insert("maxPrice".to_string(), v.to_string());
        }
        out
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemandFilters {
    /// "PRODUCT" or "SERVICE".
    pub kind: Option<String>,
}

impl DemandFilters {
    pub fn applied(&self) -> HashMap<String, String> {
        let mut out = HashMap::new();
        if let Some(v) = &self.kind {
            out.insert("type".to_string(), v.clone());
        }
        out
    }
}

pub fn product_matches(product: &Product, query: &str, filters: &ProductFilters) -> bool {
    if !matches_listing(query, &product.title, product.description.as_deref()) {
        return false;
    }
    if let Some(category) = &filters.category {
        if product.category.as_str() != category {
            return false;
        }
    }
    if let Some(hall) = &filters.hall {
        if product.address_hall.as_str() != hall {
            return false;
        }
    }
    if let Some(product_type) = &filters.product_type {
        if product.product_type.as_str() != product_type {
            return false;
        }
    }
    if let Some(status) = &filters.status {
        if product.status.as_str() != status {
            return false;
        }
    }
    if let Some(min_condition) = filters.min_condition {
        if product.condition < min_condition {
            return false;
        }
    }
    // Both price bounds are inclusive.
    if let Some(min_price) = filters.min_price {
        if product.price < min_price {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if product.price > max_price {
            return false;
        }
    }
    true
}

pub fn service_matches(service: &Service, query: &str, filters: &ServiceFilters) -> bool {
    if !matches_listing(query, &service.title, service.description.as_deref()) {
        return false;
    }
    if let Some(category) = &filters.category {
        if service.category.as_str() != category {
            return false;
        }
    }
    if let Some(hall) = &filters.hall {
        if service.address_hall.as_str() != hall {
            return false;
        }
    }
    if let Some(experience) = &filters.experience {
        if !service.experience.eq_ignore_ascii_case(experience) {
            return false;
        }
    }
    // Inclusive range overlap of the filter bounds against [min, max].
    if let Some(min_price) = filters.min_price {
        if service.max_price < min_price {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if service.min_price > max_price {
            return false;
        }
    }
    true
}

pub fn demand_matches(demand: &Demand, query: &str, filters: &DemandFilters) -> bool {
    if !matches_listing(query, &demand.title, demand.description.as_deref()) {
        return false;
    }
    if let Some(kind) = &filters.kind {
        if demand.kind.as_str() != kind {
            return false;
        }
    }
    true
}
