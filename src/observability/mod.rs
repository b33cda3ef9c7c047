//! Observability for userdesk
//!
//! - Logging through `tracing`, installed once by the CLI
//! - Operation counters in a shared `MetricsRegistry`
//!
//! # Usage
//!
//! ```ignore
//! use userdesk::observability::{init_tracing, LogFormat, MetricsRegistry};
//!
//! init_tracing("info", LogFormat::Pretty)?;
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_users_created();
//! ```

mod logging;
mod metrics;

pub use logging::{init_tracing, LogFormat};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

use thiserror::Error;

/// Observability setup errors
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// The log filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}
