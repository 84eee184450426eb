//! The session capability.
//!
//! Session retrieval is an explicit dependency handed to each handler through
//! an `Extension`, never ambient state, so the handlers stay testable without
//! a live identity provider. The binary wires in `TokenSessions`; tests build
//! their own.

use std::sync::Arc;

use dashmap::DashMap;

use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::error::{AppError, AppResult};

/// An authenticated caller. The email is the identity used for ownership
/// checks and user records.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub name: String,
}

pub trait SessionProvider: Send + Sync {
    /// Resolve a bearer token to a session, or `None` when the token is
    /// unknown or expired.
    fn validate(&self, token: &str) -> Option<Session>;
}

pub type SharedSessions = Arc<dyn SessionProvider>;

/// Resolves the `Authorization: Bearer <token>` header against the provider.
/// Missing header, malformed header, and unknown token all collapse to
/// `Unauthorized`.
pub fn authenticate(headers: &HeaderMap, sessions: &dyn SessionProvider) -> AppResult<Session> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    sessions.validate(token).ok_or(AppError::Unauthorized)
}

/// Token-to-session map, the in-process `SessionProvider`.
pub struct TokenSessions {
    tokens: DashMap<String, Session>,
}

impl TokenSessions {
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    pub fn issue(&self, token: &str, email: &str, name: &str) {
        self.tokens.insert(
            token.to_string(),
            Session {
                email: email.to_string(),
                name: name.to_string(),
            },
        );
    }

    pub fn revoke(&self, token: &str) {
        self.tokens.remove(token);
    }
}

impl Default for TokenSessions {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for TokenSessions {
    fn validate(&self, token: &str) -> Option<Session> {
        self.tokens.get(token).map(|s| s.value().clone())
    }
}
