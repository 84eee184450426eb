//! HTTP handlers for the search endpoints.
//!
//! A blank or missing `q` on a per-entity route is a successful empty
//! response, not an error. The only failure these routes surface is a
//! persistence fetch going wrong, and that is reported as a generic
//! `{ "success": false, "message": "Search failed" }` with the cause logged.

use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::catalog::store::{SharedCatalog, StoreError};

use super::engine::{
    GLOBAL_MAX_RESULTS, MAX_RESULTS, global_search, search_demands, search_products,
    search_services,
};
use super::filters::{
    DemandFilters, ProductFilters, ServiceFilters, category_filter, enum_filter, numeric_filter,
    text_filter,
};
use super::types::{GlobalSearchResponse, SearchResponse};

fn search_failed(err: StoreError) -> Response {
    tracing::error!("search failed: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": "Search failed" })),
    )
        .into_response()
}

// Filter values arrive as raw strings so that a malformed number degrades to
// "not supplied" instead of a deserialization rejection.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub category: Option<String>,
    pub hall: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub status: Option<String>,
    pub condition: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

pub async fn handle_product_search(
    Extension(catalog): Extension<SharedCatalog>,
    Query(params): Query<ProductSearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let filters = ProductFilters {
        category: category_filter(params.category.as_deref()),
        hall: enum_filter(params.hall.as_deref()),
        product_type: enum_filter(params.product_type.as_deref()),
        status: enum_filter(params.status.as_deref()),
        min_condition: numeric_filter(params.condition.as_deref()),
        min_price: numeric_filter(params.min_price.as_deref()),
        max_price: numeric_filter(params.max_price.as_deref()),
    };

    let candidates = match catalog.products() {
        Ok(candidates) => candidates,
        Err(err) => return search_failed(err),
    };

    let data = search_products(
        &candidates,
        &query,
        &filters,
        params.limit.unwrap_or(MAX_RESULTS),
    );

    Json(SearchResponse {
        success: true,
        data,
        query: query.trim().to_string(),
        applied_filters: filters.applied(),
    })
    .into_response()
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub category: Option<String>,
    pub hall: Option<String>,
    pub experience: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

pub async fn handle_service_search(
    Extension(catalog): Extension<SharedCatalog>,
    Query(params): Query<ServiceSearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let filters = ServiceFilters {
        category: category_filter(params.category.as_deref()),
        hall: enum_filter(params.hall.as_deref()),
        experience: text_filter(params.experience.as_deref()),
        min_price: numeric_filter(params.min_price.as_deref()),
        max_price: numeric_filter(params.max_price.as_deref()),
    };

    let candidates = match catalog.services() {
        Ok(candidates) => candidates,
        Err(err) => return search_failed(err),
    };

    let data = search_services(
        &candidates,
        &query,
        &filters,
        params.limit.unwrap_or(MAX_RESULTS),
    );

    Json(SearchResponse {
        success: true,
        data,
        query: query.trim().to_string(),
        applied_filters: filters.applied(),
    })
    .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct DemandSearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

pub async fn handle_demand_search(
    Extension(catalog): Extension<SharedCatalog>,
    Query(params): Query<DemandSearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let filters = DemandFilters {
        kind: enum_filter(params.kind.as_deref()),
    };

    let candidates = match catalog.demands() {
        Ok(candidates) => candidates,
        Err(err) => return search_failed(err),
    };

    let data = search_demands(
        &candidates,
        &query,
        &filters,
        params.limit.unwrap_or(MAX_RESULTS),
    );

    Json(SearchResponse {
        success: true,
        data,
        query: query.trim().to_string(),
        applied_filters: filters.applied(),
    })
    .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobalSearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

pub async fn handle_global_search(
    Extension(catalog): Extension<SharedCatalog>,
    Query(params): Query<GlobalSearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();

    let products = match catalog.products() {
        Ok(products) => products,
        Err(err) => return search_failed(err),
    };
    let services = match catalog.services() {
        Ok(services) => services,
        Err(err) => return search_failed(err),
    };
    let demands = match catalog.demands() {
        Ok(demands) => demands,
        Err(err) => return search_failed(err),
    };

    let outcome = global_search(
        &products,
        &services,
        &demands,
        &query,
        params.limit.unwrap_or(GLOBAL_MAX_RESULTS),
    );

    Json(GlobalSearchResponse {
        products: outcome.products,
        services: outcome.services,
        demands: outcome.demands,
        total: outcome.total,
        query: query.trim().to_string(),
        suggestions: outcome.suggestions,
    })
    .into_response()
}
