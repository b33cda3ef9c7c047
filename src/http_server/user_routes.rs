//! User HTTP Routes
//!
//! CRUD endpoints over the user store. Every handler is a single pass-through
//! to `UserService` plus status-code mapping.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, info};

use super::errors::{ApiError, ApiResult};
use super::representation::{Payload, Rendered, Representation};
use super::API_PREFIX;
use crate::model::{User, UserList};
use crate::observability::MetricsRegistry;
use crate::service::{InMemoryUserService, UserService};

// ==================
// Shared State
// ==================

/// User state shared across handlers
pub struct UserState {
    pub service: Arc<dyn UserService>,
    pub metrics: Arc<MetricsRegistry>,
}

impl UserState {
    pub fn new(service: Arc<dyn UserService>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { service, metrics }
    }
}

impl Default for UserState {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryUserService::new()),
            Arc::new(MetricsRegistry::new()),
        )
    }
}

// ==================
// User Routes
// ==================

/// Create user routes
pub fn user_routes(state: Arc<UserState>) -> Router {
    Router::new()
        .route(
            "/user/",
            get(list_users_handler)
                .post(create_user_handler)
                .delete(delete_all_users_handler),
        )
        .route("/user/gkpopulate", get(populate_users_handler))
        .route(
            "/user/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Absolute URI of a user when the request names its host, else a path
fn user_location(headers: &HeaderMap, id: i64) -> String {
    let path = format!("{}/user/{}", API_PREFIX, id);
    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => format!("http://{}{}", host, path),
        None => path,
    }
}

// ==================
// Read Handlers
// ==================

/// The list is always rendered as XML
async fn list_users_handler(State(state): State<Arc<UserState>>) -> Response {
    let users = state.service.find_all_users();
    if users.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    Rendered::ok(Representation::Xml, UserList::from(users)).into_response()
}

async fn get_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> ApiResult<Rendered<User>> {
    let representation = Representation::from_accept(&headers);
    info!(id, "Fetching User");
    state.metrics.increment_lookups();

    match state.service.find_by_id(id) {
        Some(user) => Ok(Rendered::ok(representation, user)),
        None => {
            error!(id, "User not found");
            state.metrics.increment_lookups_missed();
            Err(ApiError::UserNotFound(id).represented(representation))
        }
    }
}

// ==================
// Write Handlers
// ==================

async fn create_user_handler(
    State(state): State<Arc<UserState>>,
    headers: HeaderMap,
    Payload(user): Payload<User>,
) -> ApiResult<Response> {
    let representation = Representation::from_accept(&headers);
    info!(%user, "Creating User");

    if state.service.is_user_exist(&user) {
        error!(name = %user.name, "Unable to create, name already exists");
        state.metrics.increment_create_conflicts();
        return Err(ApiError::UserAlreadyExists(user.name).represented(representation));
    }

    let requested_id = user.id;
    let Some(saved) = state.service.save_user(user) else {
        state.metrics.increment_create_conflicts();
        let err = if requested_id == 0 {
            ApiError::IdsExhausted
        } else {
            ApiError::IdAlreadyExists(requested_id)
        };
        error!(id = requested_id, error = %err, "Unable to create");
        return Err(err.represented(representation));
    };
    state.metrics.increment_users_created();

    let location = user_location(&headers, saved.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

async fn update_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Payload(user): Payload<User>,
) -> ApiResult<Rendered<User>> {
    let representation = Representation::from_accept(&headers);
    info!(id, "Updating User");

    let Some(mut current) = state.service.find_by_id(id) else {
        error!(id, "Unable to update, user not found");
        state.metrics.increment_lookups_missed();
        return Err(ApiError::UpdateTargetNotFound(id).represented(representation));
    };

    current.apply_update(&user);
    state.service.update_user(current.clone());
    state.metrics.increment_users_updated();

    Ok(Rendered::ok(representation, current))
}

async fn delete_user_handler(
    State(state): State<Arc<UserState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    info!(id, "Fetching & Deleting User");

    if state.service.find_by_id(id).is_none() {
        error!(id, "Unable to delete, user not found");
        state.metrics.increment_lookups_missed();
        return Err(ApiError::DeleteTargetNotFound(id)
            .represented(Representation::from_accept(&headers)));
    }

    state.service.delete_user_by_id(id);
    state.metrics.increment_users_deleted();
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_all_users_handler(State(state): State<Arc<UserState>>) -> StatusCode {
    info!("Deleting All Users");
    state.service.delete_all_users();
    state.metrics.increment_delete_all_calls();
    StatusCode::NO_CONTENT
}

async fn populate_users_handler(State(state): State<Arc<UserState>>) -> &'static str {
    state.service.populate_dummy_users();
    info!("Populated demo users");
    "Populated users successfully."
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_user_state_default_is_empty() {
        let state = UserState::default();
        assert!(state.service.find_all_users().is_empty());
        assert_eq!(state.metrics.snapshot().users_created, 0);
    }

    #[test]
    fn test_location_with_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8080"));
        assert_eq!(
            user_location(&headers, 99),
            "http://localhost:8080/api/user/99"
        );
    }

    #[test]
    fn test_location_without_host() {
        assert_eq!(user_location(&HeaderMap::new(), 5), "/api/user/5");
    }

    #[test]
    fn test_routes_build() {
        let _router = user_routes(Arc::new(UserState::default()));
    }
}
