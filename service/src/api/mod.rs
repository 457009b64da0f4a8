//! Central module for organizing the application's API endpoints.
//!
//! Assembles the full router: the banner and health probes, the account
//! collection, and the response-policy layers that apply to everything.

pub mod accounts;
pub mod common;
pub mod health;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, security_headers};
use crate::state::AppState;

/// Builds the application router with every route and layer attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .nest("/accounts", accounts::routes::account_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer())
}
