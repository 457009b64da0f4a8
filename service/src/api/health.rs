//! Root banner and health probe endpoints.

use axum::Json;
use serde_json::{Value, json};

/// Root URL response: the service banner.
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "Account REST API Service",
        "version": "1.0",
    }))
}

/// Health status probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}
