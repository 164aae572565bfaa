use serde::{Deserialize, Serialize};
use validator::Validate;

/// New question as typed by an author; every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitQuestionRequest {
    #[validate(length(max = 1000))]
    pub question: Option<String>,
    #[validate(length(max = 300))]
    pub option1: Option<String>,
    #[validate(length(max = 300))]
    pub option2: Option<String>,
    #[validate(length(max = 300))]
    pub option3: Option<String>,
    #[validate(length(max = 300))]
    pub option4: Option<String>,
    #[validate(length(max = 300))]
    pub answer: Option<String>,
}

impl SubmitQuestionRequest {
    /// Splits into text, options and answer; missing fields become empty.
    pub fn into_parts(self) -> (String, Vec<String>, String) {
        let options = [self.option1, self.option2, self.option3, self.option4]
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        (
            self.question.unwrap_or_default(),
            options,
            self.answer.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuestionResponse {
    pub submitted: bool,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankStatsResponse {
    pub total_questions: usize,
    pub quiz_ready: bool,
}
