//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. API routes live under `/api/v1` plus a
//! top-level `/health`; every other path is rendered by the Leptos app.

pub mod auth;
pub mod users;

use std::any::Any;
use std::path::PathBuf;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde_json::{Value, json};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;

/// Browser access is limited to the configured origin, with credentials.
fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidCorsOrigin(origin.to_owned()))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]))
}

/// 500 with a JSON `{"error": ...}` body for a handler that panicked.
pub(crate) fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!(%detail, "handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal server error" }))).into_response()
}

/// JSON API routes.
///
/// # Errors
///
/// Returns [`ServerError::InvalidCorsOrigin`] when the configured origin is not
/// a valid header value.
pub fn api_routes(state: AppState) -> Result<Router, ServerError> {
    let cors = cors_layer(&state.config.cors_origin)?;

    Ok(Router::new()
        .route("/health", get(health))
        .route("/api/v1/ping", get(ping))
        .route("/api/v1/user", get(users::get_user))
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// API routes plus Leptos SSR for `/`, `/login` and `/profile`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or the API
/// routes cannot be built.
pub fn leptos_app(state: AppState) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)?
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Server is running" }))
}

/// `GET /api/v1/ping`
async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
