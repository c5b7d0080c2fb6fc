use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rkn_guard_domain::NormalizeError;
use serde_json::json;

/// Request-path failure. Only URL normalization can fail on the request path;
/// every such failure is the caller's fault.
pub struct ApiError(pub NormalizeError);

impl From<NormalizeError> for ApiError {
    fn from(err: NormalizeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
