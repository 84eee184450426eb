//! Accounts Module
//!
//! User identity and the session capability.
//!
//! The email address is the stable identity everywhere: sessions carry it,
//! catalog records reference their owner by it, and the user directory is
//! keyed by it. Profiles are created lazily on first authenticated contact,
//! so a signed-in user always has a record by the time they read it.
//!
//! ## Submodules
//! - **`session`**: the `SessionProvider` capability handlers authenticate
//!   through, plus the in-memory token provider the binary ships with.
//! - **`types`**: the `User` record and profile request payloads.
//! - **`handlers`**: account creation (email-domain gated) and profile
//!   fetch/update.

pub mod handlers;
pub mod session;
pub mod types;
