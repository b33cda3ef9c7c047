//! # Representations
//!
//! JSON and XML encoding of request and response bodies.
//!
//! - Response format follows the `Accept` header (JSON when absent or unknown)
//! - Request body format follows the `Content-Type` header (JSON by default)

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use super::errors::{ApiError, ErrorResponse};

/// Encoding errors
#[derive(Debug, Error)]
pub enum RepresentationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Wire representation of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    #[default]
    Json,
    Xml,
}

impl Representation {
    /// Representation the client accepts, from the first JSON or XML media range
    pub fn from_accept(headers: &HeaderMap) -> Self {
        Self::from_header(headers, header::ACCEPT)
    }

    /// Representation of the request body
    pub fn from_content_type(headers: &HeaderMap) -> Self {
        Self::from_header(headers, header::CONTENT_TYPE)
    }

    fn from_header(headers: &HeaderMap, name: header::HeaderName) -> Self {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::from_media_types)
            .unwrap_or_default()
    }

    fn from_media_types(value: &str) -> Option<Self> {
        value
            .split(',')
            .map(|range| {
                range
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase()
            })
            .find_map(|media| Self::from_media_type(&media))
    }

    fn from_media_type(media: &str) -> Option<Self> {
        if media.ends_with("/xml") || media.ends_with("+xml") {
            Some(Representation::Xml)
        } else if media.ends_with("/json") || media.ends_with("+json") {
            Some(Representation::Json)
        } else {
            None
        }
    }

    /// Content-Type of bodies in this representation
    pub fn content_type(&self) -> &'static str {
        match self {
            Representation::Json => "application/json",
            Representation::Xml => "application/xml",
        }
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, RepresentationError> {
        match self {
            Representation::Json => Ok(serde_json::to_string(value)?),
            Representation::Xml => {
                quick_xml::se::to_string(value).map_err(|e| RepresentationError::Xml(e.to_string()))
            }
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, RepresentationError> {
        match self {
            Representation::Json => Ok(serde_json::from_slice(body)?),
            Representation::Xml => {
                let text = std::str::from_utf8(body)?;
                quick_xml::de::from_str(text).map_err(|e| RepresentationError::Xml(e.to_string()))
            }
        }
    }
}

/// A response body rendered in a chosen representation
#[derive(Debug)]
pub struct Rendered<T> {
    pub status: StatusCode,
    pub representation: Representation,
    pub body: T,
}

impl<T> Rendered<T> {
    pub fn new(status: StatusCode, representation: Representation, body: T) -> Self {
        Self {
            status,
            representation,
            body,
        }
    }

    pub fn ok(representation: Representation, body: T) -> Self {
        Self::new(StatusCode::OK, representation, body)
    }
}

impl<T: Serialize> IntoResponse for Rendered<T> {
    fn into_response(self) -> Response {
        match self.representation.encode(&self.body) {
            Ok(body) => (
                self.status,
                [(header::CONTENT_TYPE, self.representation.content_type())],
                body,
            )
                .into_response(),
            Err(e) => {
                error!(error = %e, "failed to encode response body");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

/// Extractor decoding the request body as JSON or XML per `Content-Type`
///
/// Decode failures are rejected with `400` in the representation named by
/// `Accept`.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body_format = Representation::from_content_type(req.headers());
        let reply_format = Representation::from_accept(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidBody(e.body_text()).represented(reply_format))?;

        body_format
            .decode(&bytes)
            .map(Payload)
            .map_err(|e| ApiError::InvalidBody(e.to_string()).represented(reply_format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    use crate::model::{ErrorPayload, User};

    fn headers(name: header::HeaderName, value: &'static str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(name, HeaderValue::from_static(value));
        map
    }

    #[test]
    fn test_accept_defaults_to_json() {
        assert_eq!(Representation::from_accept(&HeaderMap::new()), Representation::Json);
        assert_eq!(
            Representation::from_accept(&headers(header::ACCEPT, "*/*")),
            Representation::Json
        );
    }

    #[test]
    fn test_accept_picks_first_known_media_type() {
        assert_eq!(
            Representation::from_accept(&headers(header::ACCEPT, "text/html, application/xml;q=0.9")),
            Representation::Xml
        );
        assert_eq!(
            Representation::from_accept(&headers(
                header::ACCEPT,
                "application/json, application/xml"
            )),
            Representation::Json
        );
    }

    #[test]
    fn test_content_type_variants() {
        assert_eq!(
            Representation::from_content_type(&headers(header::CONTENT_TYPE, "text/xml; charset=utf-8")),
            Representation::Xml
        );
        assert_eq!(
            Representation::from_content_type(&headers(header::CONTENT_TYPE, "application/problem+json")),
            Representation::Json
        );
    }

    #[test]
    fn test_decode_xml_user() {
        let xml = b"<User><id>99</id><name>Gerry</name><age>45</age><salary>100000.00</salary></User>";
        let user: User = Representation::Xml.decode(xml).unwrap();
        assert_eq!(user, User::new(99, "Gerry", 45, 100000.0));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let result: Result<User, _> = Representation::Json.decode(b"{\"name\":");
        assert!(matches!(result, Err(RepresentationError::Json(_))));
    }

    #[test]
    fn test_encode_error_payload_as_xml() {
        let xml = Representation::Xml
            .encode(&ErrorPayload::new("User with id 1 not found"))
            .unwrap();
        assert_eq!(
            xml,
            "<ErrorPayload><errorMessage>User with id 1 not found</errorMessage></ErrorPayload>"
        );
    }

    #[test]
    fn test_rendered_sets_content_type() {
        let response = Rendered::ok(Representation::Json, ErrorPayload::new("x")).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
    }
}
