//! # Status Server
//!
//! Binds the status micro-service: the plain-text status endpoint plus the
//! health check, behind permissive CORS. Stateless; holds no registry and
//! serves no validation traffic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpConfig;
use super::status_routes::{health_routes, status_routes};

/// HTTP status server
pub struct StatusServer {
    config: HttpConfig,
    router: Router,
}

impl StatusServer {
    /// Create a server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpConfig) -> Self {
        let router = Self::build_router();
        Self { config, router }
    }

    /// Build the combined router
    fn build_router() -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(status_routes())
            .merge(health_routes())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("SERVE_STARTED", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for StatusServer {
    fn default() -> Self {
        Self::new()
    }
}
