//! # HTTP Handlers
//!
//! Request handlers for accounts and authentication.

pub mod account;
pub mod auth;

use axum::Json;
use serde_json::json;

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
