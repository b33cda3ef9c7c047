//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::customer_routes::customer_routes;
use super::observability_routes::{health_routes, observability_routes};
use super::user_routes::{user_routes, UserState};
use super::API_PREFIX;
use crate::observability::MetricsRegistry;
use crate::service::{InMemoryUserService, UserService};

/// HTTP server for the user and customer API
pub struct HttpServer {
    config: HttpServerConfig,
    metrics: Arc<MetricsRegistry>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an in-memory store
    pub fn with_config(config: HttpServerConfig) -> Self {
        let service = if config.seed_demo_users {
            InMemoryUserService::with_dummy_users()
        } else {
            InMemoryUserService::new()
        };
        Self::with_service(config, Arc::new(service))
    }

    /// Create a new HTTP server over an existing store
    pub fn with_service(config: HttpServerConfig, service: Arc<dyn UserService>) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let router = Self::build_router(&config, service, metrics.clone());
        Self {
            config,
            metrics,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        service: Arc<dyn UserService>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let user_state = Arc::new(UserState::new(service, metrics.clone()));

        let api = Router::new()
            .merge(user_routes(user_state))
            .merge(customer_routes(metrics.clone()));

        Router::new()
            .merge(health_routes())
            .nest(API_PREFIX, api)
            .nest("/observability", observability_routes(metrics))
            .layer(Self::cors_layer(config))
            .layer(TraceLayer::new_for_http())
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared metrics registry
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        self.metrics.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "userdesk listening");
        info!("API endpoints under http://{}{}/", addr, API_PREFIX);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("userdesk stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
