//! Response envelopes for the search endpoints.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::types::{Demand, Product, Service};

/// Envelope for the per-entity `/{entity}/search` routes. `applied_filters`
/// echoes exactly the structured filters that took effect.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub query: String,
    #[serde(rename = "appliedFilters")]
    pub applied_filters: HashMap<String, String>,
}

/// Envelope for the cross-entity `GET /search` route. `suggestions` is
/// present only when the search found nothing and the generator produced
/// alternatives.
#[derive(Debug, Serialize)]
pub struct GlobalSearchResponse {
    pub products: Vec<Product>,
    pub services: Vec<Service>,
    pub demands: Vec<Demand>,
    pub total: usize,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}
