//! Account and profile handlers.
//!
//! `POST /user/create` is the explicit signup path and enforces the campus
//! email-domain allow-list. Profile reads upsert a bare record lazily so a
//! freshly signed-in user never sees a 404 on their own profile.

use std::sync::Arc;

use axum::{Extension, Json, extract::Path, http::HeaderMap, http::StatusCode};
use serde_json::{Value, json};

use crate::config::Config;
use crate::error::{AppError, AppResult};

use super::session::{Session, SharedSessions, authenticate};
use super::types::{CreateUserRequest, UpdateProfileRequest, User, UserDirectory};

pub fn email_domain_allowed(email: &str, allowed: &[String]) -> bool {
    match email.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let domain = domain.to_lowercase();
            allowed.iter().any(|d| *d == domain)
        }
        _ => false,
    }
}

fn bare_user(session: &Session) -> User {
    User {
        email: session.email.clone(),
        name: session.name.clone(),
        image: None,
        mobile_number: None,
    }
}

pub async fn handle_create_user(
    Extension(users): Extension<Arc<UserDirectory>>,
    Extension(sessions): Extension<SharedSessions>,
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let session = authenticate(&headers, sessions.as_ref())?;

    if !email_domain_allowed(&session.email, &config.allowed_email_domains) {
        return Err(AppError::BadRequest(
            "Email domain is not allowed".to_string(),
        ));
    }

    let existing = users.get(&session.email);
    let user = User {
        email: session.email.clone(),
        name: req
            .name
            .or_else(|| existing.as_ref().map(|u| u.name.clone()))
            .unwrap_or_else(|| session.name.clone()),
        image: req.image.or_else(|| existing.as_ref().and_then(|u| u.image.clone())),
        mobile_number: req
            .mobile_number
            .or_else(|| existing.and_then(|u| u.mobile_number)),
    };

    users.upsert(user.clone());
    tracing::info!("user {} created", user.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "user": user })),
    ))
}

pub async fn handle_get_profile(
    Extension(users): Extension<Arc<UserDirectory>>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;

    let user = match users.get(&session.email) {
        Some(user) => user,
        None => {
            // First authenticated contact: materialize the profile.
            let user = bare_user(&session);
            users.upsert(user.clone());
            user
        }
    };

    Ok(Json(json!({ "user": user })))
}

pub async fn handle_update_profile(
    Extension(users): Extension<Arc<UserDirectory>>,
    Extension(sessions): Extension<SharedSessions>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> AppResult<Json<Value>> {
    let session = authenticate(&headers, sessions.as_ref())?;

    let mut user = users.get(&session.email).unwrap_or_else(|| bare_user(&session));

    if let Some(name) = req.name {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }
        user.name = trimmed.to_string();
    }
    if let Some(image) = req.image {
        user.image = Some(image);
    }
    if let Some(mobile) = req.mobile_number {
        user.mobile_number = Some(mobile);
    }

    users.upsert(user.clone());

    Ok(Json(json!({ "success": true, "user": user })))
}

/// Public profile lookup by email.
pub async fn handle_get_user(
    Extension(users): Extension<Arc<UserDirectory>>,
    Path(email): Path<String>,
) -> AppResult<Json<Value>> {
    let user = users.get(&email).ok_or(AppError::NotFound("User"))?;
    Ok(Json(json!({ "user": user })))
}
