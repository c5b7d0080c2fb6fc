use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// JSON API, meant to be nested under `/api`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::check::routes())
        .merge(handlers::registry::routes())
        .with_state(state)
}

/// Liveness and readiness probes, served at the root.
pub fn create_probe_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        .with_state(state)
}
