use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::question::{Question, OPTION_COUNT};

pub struct SubmissionService;

impl SubmissionService {
    /// Builds a bank-ready question from author input.
    ///
    /// Any failure is reported as the same `InvalidSubmission` error.
    pub fn validate(text: &str, raw_options: &[String], answer: &str) -> Result<Question> {
        if text.is_empty() {
            return Err(Error::InvalidSubmission);
        }

        let options: [String; OPTION_COUNT] = raw_options
            .to_vec()
            .try_into()
            .map_err(|_| Error::InvalidSubmission)?;

        if options.iter().any(|o| o.is_empty()) {
            return Err(Error::InvalidSubmission);
        }

        let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
        if distinct.len() != OPTION_COUNT {
            return Err(Error::InvalidSubmission);
        }

        if !options.iter().any(|o| o == answer) {
            return Err(Error::InvalidSubmission);
        }

        Ok(Question {
            question: text.to_string(),
            options,
            answer: answer.to_string(),
        })
    }
}
