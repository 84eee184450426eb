//! Catalog Module
//!
//! Holds everything users can post to the marketplace and the persistence
//! boundary the rest of the crate reads through.
//!
//! ## Entities
//! - **Product**: a physical item offered for sale or rent, priced, tied to a
//!   residence hall and a 1-5 condition rating.
//! - **Service**: an offered skill (tutoring, repair, ...) with a price range
//!   instead of a single price.
//! - **Demand**: a request *for* a product or service category, posted by a
//!   user who wants something rather than offers it.
//!
//! Every entity is owned by exactly one user, referenced by email. Ownership
//! gates update and delete; reads are open.
//!
//! ## Submodules
//! - **`types`**: entity structs, fixed enumerations, request payloads.
//! - **`store`**: the `Catalog` persistence trait and its in-memory
//!   `MemoryCatalog` implementation.
//! - **`handlers`**: Axum CRUD handlers, including the multi-mode
//!   `GET /products` listing endpoint.
//! - **`seed`**: demo listings the binary loads at startup.

pub mod handlers;
pub mod seed;
pub mod store;
pub mod types;
