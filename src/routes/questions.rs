use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::question_dto::{BankStatsResponse, SubmitQuestionRequest, SubmitQuestionResponse};
use crate::error::{Error, Result};
use crate::models::quiz_attempt::QUIZ_SIZE;
use crate::services::submission_service::SubmissionService;
use crate::AppState;

#[axum::debug_handler]
pub async fn submit_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitQuestionRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Malformed question submission body");
        Error::InvalidSubmission
    })?;

    if let Err(e) = req.validate() {
        tracing::warn!(error = %e, "Question submission exceeds field limits");
        return Err(Error::InvalidSubmission);
    }

    let (text, options, answer) = req.into_parts();
    let question = SubmissionService::validate(&text, &options, &answer).map_err(|e| {
        tracing::warn!("Invalid question submission rejected");
        e
    })?;

    state.question_bank.append(question).await?;
    let total_questions = state.question_bank.len().await;

    Ok((
        StatusCode::CREATED,
        Json(SubmitQuestionResponse {
            submitted: true,
            total_questions,
        }),
    )
        .into_response())
}

#[axum::debug_handler]
pub async fn bank_stats(State(state): State<AppState>) -> Json<BankStatsResponse> {
    let total_questions = state.question_bank.len().await;
    Json(BankStatsResponse {
        total_questions,
        quiz_ready: total_questions >= QUIZ_SIZE,
    })
}
