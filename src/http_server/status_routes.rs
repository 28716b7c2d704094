//! Status and health routes
//!
//! `GET /` is the single unauthenticated status endpoint: a plain-text line
//! with the service name and current wall-clock time. `GET /health` is the
//! conventional JSON health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the status route (plain-text, root level)
pub fn status_routes() -> Router {
    Router::new().route("/", get(status_handler))
}

/// Create the health route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Plain-text status handler
async fn status_handler() -> impl IntoResponse {
    (StatusCode::OK, status_line(Local::now()))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Formats the status line for a given instant.
fn status_line(now: DateTime<Local>) -> String {
    format!(
        "Response from fieldcheck, current time is {}",
        now.format("%H:%M:%S")
    )
}
