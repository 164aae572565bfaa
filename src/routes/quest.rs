use axum::Json;

use crate::dto::quiz_dto::{PrizeSummary, QuestSummary};
use crate::models::quiz_attempt::QUIZ_SIZE;

#[axum::debug_handler]
pub async fn get_quest() -> Json<QuestSummary> {
    Json(QuestSummary {
        title: "Knowledge Quest".to_string(),
        description: format!(
            "Test your knowledge of AI/ML, the Nuclear Industry and Southern Company with {} random questions and win exciting prizes!",
            QUIZ_SIZE
        ),
        quiz_size: QUIZ_SIZE,
        prizes: PrizeSummary::tiers(),
    })
}
