use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use serde_json::json;

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!("Unknown route accessed: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": uri.path(),
        })),
    )
}
