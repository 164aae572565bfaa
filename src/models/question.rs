use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice entry of the question bank.
///
/// The serialized field names are the on-disk schema of the bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub answer: String,
}

impl Question {
    pub fn is_correct(&self, given: &str) -> bool {
        self.answer == given
    }
}
