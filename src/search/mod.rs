//! Search Module
//!
//! The in-memory search and filter pipeline over catalog snapshots.
//!
//! ## Overview
//! Candidates are fetched whole from the `Catalog` (already newest-first) and
//! filtered in memory; there is no index, no relevance scoring beyond
//! substring containment, and no re-sorting. A query plus a typed filter bag
//! goes in, a capped prefix of the matching candidates comes out.
//!
//! ## Responsibilities
//! - **Normalization**: case- and whitespace-insensitive substring matching
//!   ("mac book" finds "MacBook").
//! - **Filtering**: per-entity predicates combining the text match with
//!   structured filters (category, hall, price range, condition, ...).
//! - **Orchestration**: per-entity and cross-entity search with result caps.
//! - **Suggestions**: alternative terms mined from listing titles when a
//!   cross-entity search comes back empty.
//! - **API**: the `/{entity}/search` and `/search` HTTP endpoints.
//!
//! ## Submodules
//! - **`text`**: the normalizer, the sole text-matching primitive.
//! - **`filters`**: typed filter bags and the per-entity predicates.
//! - **`engine`**: the orchestrators and result caps.
//! - **`suggest`**: the zero-result suggestion generator.
//! - **`types`**: response envelopes.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod engine;
pub mod filters;
pub mod handlers;
pub mod suggest;
pub mod text;
pub mod types;

#[cfg(test)]
mod tests;
