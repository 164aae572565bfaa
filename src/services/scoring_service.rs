use crate::models::quiz_attempt::QuizAttempt;
use crate::models::scored_result::{IncorrectItem, ScoredResult};

pub struct ScoringService;

impl ScoringService {
    /// Scores `answers` position by position against the attempt.
    ///
    /// Comparison is exact and case-sensitive. Absent or empty answers count
    /// as wrong and are reported as `None`; answers past the last question
    /// are ignored.
    pub fn score(attempt: &QuizAttempt, answers: &[Option<String>]) -> ScoredResult {
        let mut incorrect_items = Vec::new();

        for (idx, q) in attempt.questions.iter().enumerate() {
            let given = answers
                .get(idx)
                .and_then(|a| a.as_deref())
                .filter(|a| !a.is_empty());

            match given {
                Some(given) if q.is_correct(given) => {}
                _ => incorrect_items.push(IncorrectItem {
                    question: q.question.clone(),
                    your_answer: given.map(str::to_string),
                    correct_answer: q.answer.clone(),
                }),
            }
        }

        let total = attempt.questions.len();
        ScoredResult {
            correct_count: total - incorrect_items.len(),
            total,
            incorrect_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Question;

    fn q(label: &str) -> Question {
        Question {
            question: format!("{}?", label),
            options: [
                format!("{}1", label),
                format!("{}2", label),
                format!("{}3", label),
                format!("{}4", label),
            ],
            answer: format!("{}2", label),
        }
    }

    fn attempt() -> QuizAttempt {
        QuizAttempt::new(["A", "B", "C", "D", "E"].iter().map(|l| q(l)).collect())
    }

    fn answers(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn all_correct_answers_score_full_marks() {
        let attempt = attempt();
        let given: Vec<_> = attempt
            .questions
            .iter()
            .map(|q| Some(q.answer.clone()))
            .collect();

        let result = ScoringService::score(&attempt, &given);
        assert_eq!(result.correct_count, 5);
        assert_eq!(result.total, 5);
        assert!(result.incorrect_items.is_empty());
    }

    #[test]
    fn incorrect_items_follow_attempt_order() {
        let attempt = attempt();
        let given = answers(&[Some("A2"), Some("wrong"), Some("C2"), Some("wrong"), Some("E2")]);

        let result = ScoringService::score(&attempt, &given);
        assert_eq!(result.correct_count, 3);
        assert_eq!(
            result.incorrect_items,
            vec![
                IncorrectItem {
                    question: "B?".into(),
                    your_answer: Some("wrong".into()),
                    correct_answer: "B2".into(),
                },
                IncorrectItem {
                    question: "D?".into(),
                    your_answer: Some("wrong".into()),
                    correct_answer: "D2".into(),
                },
            ]
        );
    }

    #[test]
    fn comparison_is_exact() {
        let attempt = attempt();
        let given = answers(&[Some("a2"), Some(" B2"), Some("C2 "), Some("D2"), Some("E2")]);

        let result = ScoringService::score(&attempt, &given);
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.incorrect_items[0].your_answer.as_deref(), Some("a2"));
    }

    #[test]
    fn missing_and_blank_answers_are_wrong() {
        let attempt = attempt();
        let given = answers(&[None, Some(""), Some("C2")]);

        let result = ScoringService::score(&attempt, &given);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.incorrect_items.len(), 4);
        assert!(result.incorrect_items.iter().all(|i| i.your_answer.is_none()));
        assert_eq!(
            result.correct_count + result.incorrect_items.len(),
            result.total
        );
    }

    #[test]
    fn extra_answers_are_ignored() {
        let attempt = attempt();
        let given = answers(&[
            Some("A2"),
            Some("B2"),
            Some("C2"),
            Some("D2"),
            Some("E2"),
            Some("surplus"),
        ]);

        let result = ScoringService::score(&attempt, &given);
        assert_eq!(result.correct_count, 5);
        assert_eq!(result.total, 5);
    }
}
