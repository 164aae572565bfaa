use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::dto::quiz_dto::{
    CreateSessionResponse, QuizResponse, SubmitAnswersRequest, SubmitAnswersResponse,
};
use crate::error::{Error, Result};
use crate::services::quiz_service::QuizService;
use crate::services::scoring_service::ScoringService;
use crate::utils::token::generate_session_id;
use crate::AppState;

#[axum::debug_handler]
pub async fn create_session(State(state): State<AppState>) -> Response {
    let session_id = generate_session_id();
    state.sessions.register(&session_id);
    tracing::info!(session_id = %session_id, "Session created");
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id })).into_response()
}

#[axum::debug_handler]
pub async fn draw_quiz(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<QuizResponse>> {
    let quiz = QuizService::new(session_id.clone(), state.sessions.clone());
    quiz.ensure_session()?;
    let bank = state.question_bank.questions().await;
    let attempt = quiz.start_new_attempt(&bank).map_err(|e| {
        tracing::warn!(session_id = %session_id, error = %e, "Quiz draw refused");
        e
    })?;
    Ok(Json(QuizResponse::from_attempt(&session_id, &attempt)))
}

#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<QuizResponse>> {
    let quiz = QuizService::new(session_id.clone(), state.sessions.clone());
    quiz.ensure_session()?;
    let attempt = quiz
        .current_attempt()
        .ok_or_else(|| Error::NotFound(format!("No quiz for session {}", session_id)))?;
    Ok(Json(QuizResponse::from_attempt(&session_id, &attempt)))
}

#[axum::debug_handler]
pub async fn submit_answers(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    payload: std::result::Result<Json<SubmitAnswersRequest>, JsonRejection>,
) -> Result<Json<SubmitAnswersResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(session_id = %session_id, error = %rejection, "Malformed answers body");
        Error::BadRequest("Answers must be a list of strings or nulls".to_string())
    })?;

    let quiz = QuizService::new(session_id.clone(), state.sessions.clone());
    quiz.ensure_session()?;
    let Some(attempt) = quiz.current_attempt() else {
        tracing::warn!(session_id = %session_id, "Answers submitted without a drawn quiz");
        return Err(Error::MissingAttempt);
    };

    let result = ScoringService::score(&attempt, &req.answers);
    tracing::info!(
        session_id = %session_id,
        correct = result.correct_count,
        total = result.total,
        "Quiz scored"
    );
    Ok(Json(result.into()))
}
