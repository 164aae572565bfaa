use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Question bank is unreadable or corrupt: {0}")]
    StorageCorrupt(String),

    #[error("Failed to persist question bank: {0}")]
    StorageWrite(String),

    #[error("Question bank holds {available} questions, {required} are needed")]
    InsufficientQuestions { available: usize, required: usize },

    #[error("Invalid submission. Please fill all fields correctly.")]
    InvalidSubmission,

    #[error("No quiz has been started for this session")]
    MissingAttempt,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::StorageCorrupt(_) => "storage_corrupt",
            Error::StorageWrite(_) => "storage_write_failed",
            Error::InsufficientQuestions { .. } => "insufficient_questions",
            Error::InvalidSubmission => "invalid_submission",
            Error::MissingAttempt => "missing_attempt",
            Error::BadRequest(_) => "bad_request",
            Error::NotFound(_) => "not_found",
            Error::Json(_) => "invalid_json",
            Error::Io(_) | Error::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            Error::InvalidSubmission => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::MissingAttempt => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::InsufficientQuestions { .. } => (StatusCode::CONFLICT, self.to_string()),
            Error::StorageWrite(_) | Error::StorageCorrupt(_) => {
                tracing::error!(error = %self, "Question bank storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The question bank could not be saved. Please try again.".to_string(),
                )
            }
            _ => {
                tracing::error!(error = ?self, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": self.code(), "message": message }));
        (status, body).into_response()
    }
}
