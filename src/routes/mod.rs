use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::RecordStore;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::services::CatalogSources;

pub mod preferences;
pub mod recommendations;
pub mod users;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub catalogs: Arc<CatalogSources>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, catalogs: CatalogSources) -> Self {
        Self {
            store,
            catalogs: Arc::new(catalogs),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Accounts
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/user-preference/:user_id", get(users::get_profile))
        .route("/update-user/:user_id", put(users::update_user))
        // Preferences
        .route("/user-preference", post(preferences::save_preference))
        .route("/preference/:user_id", get(preferences::get_preference))
        .route("/source/:user_id", get(preferences::get_source))
        .route(
            "/update-preference/:user_id",
            put(preferences::update_preference),
        )
        // Recommendations
        .route("/recommend/:user_id", get(recommendations::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
