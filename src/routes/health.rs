use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let questions = state.question_bank.len().await;
    let body = json!({
        "status": "ok",
        "questions": questions,
    });
    (StatusCode::OK, Json(body))
}
