//! # HTTP Status Micro-Service
//!
//! A single unauthenticated plain-text status endpoint with a health check.
//! No input validation, no persisted state; the validation engine is not
//! reachable from here.
//!
//! # Endpoints
//!
//! - `GET /` - Plain-text status line with the current time
//! - `GET /health` - JSON health check

pub mod config;
pub mod server;
pub mod status_routes;

pub use config::HttpConfig;
pub use server::StatusServer;
