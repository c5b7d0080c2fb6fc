use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use crate::{
    dto::{CheckQuery, CheckRequest, CheckResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/check", get(check_url_query).post(check_url_body))
}

async fn check_url_query(
    State(state): State<AppState>,
    Query(params): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, ApiError> {
    check(&state, &params.url)
}

async fn check_url_body(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    check(&state, &req.url)
}

fn check(state: &AppState, raw: &str) -> Result<Json<CheckResponse>, ApiError> {
    let verdict = state.check_url.execute(raw)?;
    Ok(Json(verdict.into()))
}
