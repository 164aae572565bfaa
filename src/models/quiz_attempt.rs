use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// Questions in every attempt.
pub const QUIZ_SIZE: usize = 5;

/// The questions drawn for one session's quiz round, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            created_at: Utc::now(),
        }
    }
}
