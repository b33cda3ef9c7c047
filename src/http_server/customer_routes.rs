//! Customer HTTP Routes
//!
//! Demo endpoints with fixed responses. Nothing here touches the user store.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use tracing::info;

use super::representation::{Payload, Rendered, Representation};
use crate::model::Customer;
use crate::observability::MetricsRegistry;

/// Acknowledgement returned by both POST endpoints
pub const ACK: &str = "Done";

/// Create customer routes
pub fn customer_routes(metrics: Arc<MetricsRegistry>) -> Router {
    Router::new()
        .route("/customer", get(get_customer_handler).post(post_customer_handler))
        .route("/customerstring", post(post_customer_string_handler))
        .with_state(metrics)
}

async fn get_customer_handler(headers: HeaderMap) -> Rendered<Customer> {
    Rendered::ok(Representation::from_accept(&headers), Customer::sample())
}

async fn post_customer_handler(
    State(metrics): State<Arc<MetricsRegistry>>,
    Payload(customer): Payload<Customer>,
) -> &'static str {
    info!(%customer, "Received customer");
    metrics.increment_customers_received();
    ACK
}

/// Body is logged verbatim, no decoding
async fn post_customer_string_handler(
    State(metrics): State<Arc<MetricsRegistry>>,
    body: String,
) -> &'static str {
    info!(body = %body, "Received customer string");
    metrics.increment_customers_received();
    ACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_build() {
        let _router = customer_routes(Arc::new(MetricsRegistry::new()));
    }

    #[tokio::test]
    async fn test_get_customer_defaults_to_json() {
        let rendered = get_customer_handler(HeaderMap::new()).await;
        assert_eq!(rendered.representation, Representation::Json);
        assert_eq!(rendered.body, Customer::sample());
    }

    #[tokio::test]
    async fn test_post_customer_string_counts() {
        let metrics = Arc::new(MetricsRegistry::new());
        let ack = post_customer_string_handler(State(metrics.clone()), "<customer/>".to_string()).await;

        assert_eq!(ack, ACK);
        assert_eq!(metrics.snapshot().customers_received, 1);
    }
}
