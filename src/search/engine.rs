//! Search orchestrators.
//!
//! Pure functions over candidate slices: no side effects, idempotent, safe to
//! retry. Candidate order (newest first, supplied by the store) is preserved;
//! the orchestrator never re-sorts.

use crate::catalog::types::{Demand, Product, Service};

use super::filters::{
    DemandFilters, ProductFilters, ServiceFilters, demand_matches, product_matches,
    service_matches,
};
use super::suggest::{MAX_SUGGESTIONS, suggest};
use super::text::matches_listing;

/// Hard ceiling on any per-entity search, regardless of the requested limit.
pub const MAX_RESULTS: usize = 100;

/// Default and ceiling for the per-type cap of the cross-entity search.
pub const GLOBAL_MAX_RESULTS: usize = 20;

/// Queries shorter than this short-circuit the cross-entity search.
pub const MIN_GLOBAL_QUERY_LEN: usize = 2;

/// An empty or whitespace-only query signals "no query provided" and yields
/// an empty sequence, never an error.
pub fn search_products(
    candidates: &[Product],
    query: &str,
    filters: &ProductFilters,
    limit: usize,
) -> Vec<Product> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|p| product_matches(p, query, filters))
        .take(limit.min(MAX_RESULTS))
        .cloned()
        .collect()
}

pub fn search_services(
    candidates: &[Service],
    query: &str,
    filters: &ServiceFilters,
    limit: usize,
) -> Vec<Service> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|s| service_matches(s, query, filters))
        .take(limit.min(MAX_RESULTS))
        .cloned()
        .collect()
}

pub fn search_demands(
    candidates: &[Demand],
    query: &str,
    filters: &DemandFilters,
    limit: usize,
) -> Vec<Demand> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|d| demand_matches(d, query, filters))
        .take(limit.min(MAX_RESULTS))
        .cloned()
        .collect()
}

/// Outcome of the cross-entity search before envelope shaping.
#[derive(Debug, Default)]
pub struct GlobalSearchOutcome {
    pub products: Vec<Product>,
    pub services: Vec<Service>,
    pub demands: Vec<Demand>,
    pub total: usize,
    /// Populated only on a zero-result search, and only when the generator
    /// produced anything.
    pub suggestions: Option<Vec<String>>,
}

/// Runs the text match against all three corpora at once, each capped at
/// `min(limit, GLOBAL_MAX_RESULTS)`. A trimmed query shorter than
/// `MIN_GLOBAL_QUERY_LEN` yields the empty outcome with no suggestions.
pub fn global_search(
    products: &[Product],
    services: &[Service],
    demands: &[Demand],
    query: &str,
    limit: usize,
) -> GlobalSearchOutcome {
    let query = query.trim();
    if query.chars().count() < MIN_GLOBAL_QUERY_LEN {
        return GlobalSearchOutcome::default();
    }

    let cap = limit.min(GLOBAL_MAX_RESULTS);

    let matched_products: Vec<Product> = products
        .iter()
        .filter(|p| matches_listing(query, &p.title, p.description.as_deref()))
        .take(cap)
        .cloned()
        .collect();
    let matched_services: Vec<Service> = services
        .iter()
        .filter(|s| matches_listing(query, &s.title, s.description.as_deref()))
        .take(cap)
        .cloned()
        .collect();
    let matched_demands: Vec<Demand> = demands
        .iter()
        .filter(|d| matches_listing(query, &d.title, d.description.as_deref()))
        .take(cap)
        .cloned()
        .collect();

    let total = matched_products.len() + matched_services.len() + matched_demands.len();

    let suggestions = if total == 0 {
        let titles: Vec<&str> = products
            .iter()
            .map(|p| p.title.as_str())
            .chain(services.iter().map(|s| s.title.as_str()))
            .chain(demands.iter().map(|d| d.title.as_str()))
            .collect();
        let proposed = suggest(&titles, query, MAX_SUGGESTIONS);
        if proposed.is_empty() {
            None
        } else {
            Some(proposed)
        }
    } else {
        None
    };

    GlobalSearchOutcome {
        products: matched_products,
        services: matched_services,
        demands: matched_demands,
        total,
        suggestions,
    }
}
