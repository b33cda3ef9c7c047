//! # HTTP Server Module
//!
//! Route table and handlers for the user and customer API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/user/*` - User CRUD (JSON and XML)
//! - `/api/customer`, `/api/customerstring` - Demo customer endpoints
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod customer_routes;
pub mod errors;
pub mod observability_routes;
pub mod representation;
pub mod server;
pub mod user_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use representation::{Payload, Rendered, Representation};
pub use server::HttpServer;

/// Path prefix of the resource API
pub const API_PREFIX: &str = "/api";
