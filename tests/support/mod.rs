//! Shared helpers for driving the router in-process

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use userdesk::http_server::{HttpServer, HttpServerConfig};
use userdesk::observability::MetricsRegistry;
use userdesk::service::InMemoryUserService;

/// A router plus handles on the store and metrics behind it
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryUserService>,
    pub metrics: Arc<MetricsRegistry>,
}

impl TestApp {
    pub fn empty() -> Self {
        Self::with_store(InMemoryUserService::new())
    }

    pub fn seeded() -> Self {
        Self::with_store(InMemoryUserService::with_dummy_users())
    }

    fn with_store(store: InMemoryUserService) -> Self {
        let store = Arc::new(store);
        let server = HttpServer::with_service(HttpServerConfig::default(), store.clone());
        let metrics = server.metrics();
        Self {
            router: server.router(),
            store,
            metrics,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(request(Method::GET, uri, None, Body::empty())).await
    }

    pub async fn get_xml(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/xml")
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(request(Method::DELETE, uri, None, Body::empty())).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send(request(
            Method::POST,
            uri,
            Some("application/json"),
            Body::from(body.to_string()),
        ))
        .await
    }

    pub async fn post_xml(&self, uri: &str, body: &str) -> TestResponse {
        self.send(request(
            Method::POST,
            uri,
            Some("text/xml"),
            Body::from(body.to_string()),
        ))
        .await
    }

    pub async fn put_xml(&self, uri: &str, body: &str) -> TestResponse {
        self.send(request(
            Method::PUT,
            uri,
            Some("application/xml"),
            Body::from(body.to_string()),
        ))
        .await
    }

    /// POST with an explicit body type and `Accept: application/xml`
    pub async fn post_accepting_xml(&self, uri: &str, content_type: &str, body: &str) -> TestResponse {
        let mut request = request(
            Method::POST,
            uri,
            Some(content_type),
            Body::from(body.to_string()),
        );
        request.headers_mut().insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/xml"),
        );
        self.send(request).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> TestResponse {
        self.send(request(
            Method::PUT,
            uri,
            Some("application/json"),
            Body::from(body.to_string()),
        ))
        .await
    }
}

pub fn request(method: Method, uri: &str, content_type: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(body).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}
