use serde::{Deserialize, Serialize};

use crate::models::quiz_attempt::QuizAttempt;
use crate::models::scored_result::{IncorrectItem, Prize, ScoredResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// A drawn question as shown to the player, without its answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub index: usize,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub session_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub questions: Vec<PublicQuestion>,
}

impl QuizResponse {
    pub fn from_attempt(session_id: &str, attempt: &QuizAttempt) -> Self {
        Self {
            session_id: session_id.to_string(),
            created_at: attempt.created_at,
            questions: attempt
                .questions
                .iter()
                .enumerate()
                .map(|(index, q)| PublicQuestion {
                    index,
                    question: q.question.clone(),
                    options: q.options.to_vec(),
                })
                .collect(),
        }
    }
}

/// Answers aligned with the `index` of each drawn question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: Vec<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeSummary {
    pub prize: Prize,
    pub label: String,
    pub required_correct: usize,
}

impl PrizeSummary {
    pub fn tiers() -> Vec<Self> {
        Prize::TIERS
            .iter()
            .map(|&(prize, required_correct)| Self {
                prize,
                label: prize.label().to_string(),
                required_correct,
            })
            .collect()
    }

    fn for_prize(prize: Prize) -> Option<Self> {
        Self::tiers().into_iter().find(|t| t.prize == prize)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswersResponse {
    pub message: String,
    pub correct_count: usize,
    pub total: usize,
    pub incorrect_items: Vec<IncorrectItem>,
    pub prize: Option<PrizeSummary>,
}

impl From<ScoredResult> for SubmitAnswersResponse {
    fn from(result: ScoredResult) -> Self {
        Self {
            message: result.headline(),
            prize: result.prize().and_then(PrizeSummary::for_prize),
            correct_count: result.correct_count,
            total: result.total,
            incorrect_items: result.incorrect_items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestSummary {
    pub title: String,
    pub description: String,
    pub quiz_size: usize,
    pub prizes: Vec<PrizeSummary>,
}
