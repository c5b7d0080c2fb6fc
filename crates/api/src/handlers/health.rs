use axum::{extract::State, http::StatusCode};
use rkn_guard_application::use_cases::Readiness;
use tracing::debug;

use crate::state::AppState;

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}

/// Readiness probe: 503 until a fresh, non-empty registry is published.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.registry_status.readiness() {
        Readiness::Ready => (StatusCode::OK, "ready"),
        Readiness::Stale => {
            debug!("Readiness probe: registry stale");
            (StatusCode::SERVICE_UNAVAILABLE, "stale")
        }
    }
}
