use axum::{extract::State, response::Json, routing::get, Router};

use crate::{dto::RegistryStatusResponse, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/registry", get(get_registry_status))
}

async fn get_registry_status(State(state): State<AppState>) -> Json<RegistryStatusResponse> {
    Json(state.registry_status.status().into())
}
