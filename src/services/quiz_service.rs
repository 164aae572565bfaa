use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::models::quiz_attempt::{QuizAttempt, QUIZ_SIZE};
use crate::services::session_store::SessionStore;

/// Draws a quiz for one session and remembers it until the next draw.
#[derive(Clone)]
pub struct QuizService {
    session_id: String,
    sessions: Arc<dyn SessionStore>,
}

impl QuizService {
    pub fn new(session_id: impl Into<String>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            session_id: session_id.into(),
            sessions,
        }
    }

    pub fn start_new_attempt(&self, bank: &[Question]) -> Result<QuizAttempt> {
        self.start_new_attempt_with(bank, &mut rand::thread_rng())
    }

    /// Fails with `NotFound` unless the session was issued and is still live.
    pub fn ensure_session(&self) -> Result<()> {
        if self.sessions.is_active(&self.session_id) {
            Ok(())
        } else {
            Err(Error::NotFound(format!("Unknown session {}", self.session_id)))
        }
    }

    pub fn start_new_attempt_with<R: Rng + ?Sized>(
        &self,
        bank: &[Question],
        rng: &mut R,
    ) -> Result<QuizAttempt> {
        self.ensure_session()?;
        let attempt = draw_attempt(bank, rng)?;
        self.sessions.set(&self.session_id, attempt.clone());
        tracing::info!(
            session_id = %self.session_id,
            bank_size = bank.len(),
            "New quiz attempt drawn"
        );
        Ok(attempt)
    }

    pub fn current_attempt(&self) -> Option<QuizAttempt> {
        self.sessions.get(&self.session_id)
    }
}

/// Uniform sample of `QUIZ_SIZE` distinct bank positions, in random order.
pub fn draw_attempt<R: Rng + ?Sized>(bank: &[Question], rng: &mut R) -> Result<QuizAttempt> {
    if bank.len() < QUIZ_SIZE {
        return Err(Error::InsufficientQuestions {
            available: bank.len(),
            required: QUIZ_SIZE,
        });
    }

    let mut indices: Vec<usize> = (0..bank.len()).collect();
    let (picked, _) = indices.partial_shuffle(rng, QUIZ_SIZE);
    let questions = picked.iter().map(|&i| bank[i].clone()).collect();
    Ok(QuizAttempt::new(questions))
}
