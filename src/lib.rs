//! Campus Marketplace Service Library
//!
//! This library crate defines the modules behind the marketplace HTTP API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of loosely coupled subsystems:
//!
//! - **`accounts`**: User identity and the session capability. Email is the
//!   stable identity key; profiles are created lazily on first authenticated
//!   contact, and account creation is gated by a campus email-domain
//!   allow-list.
//! - **`catalog`**: The marketplace entities (products, services, demands),
//!   the `Catalog` persistence boundary with its in-memory implementation,
//!   and the session-gated CRUD handlers with owner-only writes.
//! - **`search`**: The in-memory search and filter pipeline: whitespace- and
//!   case-insensitive text matching, typed per-entity filter bags, capped
//!   per-entity and cross-entity orchestration, and the zero-result
//!   suggestion generator.
//! - **`config`** / **`error`**: environment configuration and the error
//!   taxonomy mapped onto HTTP statuses.

pub mod accounts;
pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
