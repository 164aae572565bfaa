use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncorrectItem {
    pub question: String,
    /// `None` when nothing was submitted for the question.
    pub your_answer: Option<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub correct_count: usize,
    pub total: usize,
    pub incorrect_items: Vec<IncorrectItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prize {
    JblSpeaker,
    SouthernCompanyCap,
}

impl Prize {
    pub const TIERS: [(Prize, usize); 2] =
        [(Prize::JblSpeaker, 5), (Prize::SouthernCompanyCap, 4)];

    pub fn label(self) -> &'static str {
        match self {
            Prize::JblSpeaker => "JBL Speaker",
            Prize::SouthernCompanyCap => "Southern Company Cap",
        }
    }
}

impl ScoredResult {
    pub fn is_perfect(&self) -> bool {
        self.incorrect_items.is_empty()
    }

    pub fn headline(&self) -> String {
        if self.is_perfect() {
            "You Win!".to_string()
        } else {
            format!("You got {} wrong.", self.incorrect_items.len())
        }
    }

    /// Tiers are defined for a five-question quiz; other totals never win.
    pub fn prize(&self) -> Option<Prize> {
        if self.total != crate::models::quiz_attempt::QUIZ_SIZE {
            return None;
        }
        Prize::TIERS
            .iter()
            .find(|(_, needed)| self.correct_count == *needed)
            .map(|(prize, _)| *prize)
    }
}
