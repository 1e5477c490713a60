use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::api;
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        // --- Generation ---
        .route("/generate", post(api::generate::generate_qr_code))
        // --- Auth ---
        .route("/auth/login", post(api::auth::login))
        .route("/auth/api_key", get(api::auth::api_key_access))
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
