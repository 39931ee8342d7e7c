use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// `GET /` (liveness, HEAD included) and `GET /health`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::heartbeat))
        .route("/health", get(health::health_check))
}
