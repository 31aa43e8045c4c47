//! Bearer-token extraction for protected API routes.
//!
//! Tokens are accepted without verification: any non-empty `Authorization`
//! header authenticates as the configured mock user.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Strip an optional `Bearer ` prefix. `None` for a missing or blank header.
pub(crate) fn parse_bearer(header: Option<&str>) -> Option<&str> {
    let raw = header?.trim_start();
    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
    (!token.is_empty()).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Caller authenticated by bearer token.
/// Use as a handler parameter to require authentication.
#[derive(Debug)]
pub struct BearerUser {
    pub user_id: String,
    pub token: String,
}

/// 401 with a JSON `{"error": ...}` body.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Authorization header required" }))).into_response()
    }
}

impl<S> FromRequestParts<S> for BearerUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        let Some(token) = parse_bearer(header) else {
            tracing::debug!(path = %parts.uri.path(), "missing bearer token");
            return Err(AuthRejection);
        };

        let app_state = AppState::from_ref(state);
        Ok(Self { user_id: app_state.config.mock_user_id.clone(), token: token.to_owned() })
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
