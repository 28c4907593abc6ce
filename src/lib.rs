pub mod config;
pub mod error;
pub mod handlers;
pub mod message;
pub mod types;
pub mod wechat;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use handlers::AppState;

/// Assemble the full router over shared state. Split out of `main` so
/// integration tests can mount the same application.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/wxsend", get(handlers::send_get).post(handlers::send_post))
        .route("/detail", get(handlers::detail))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
