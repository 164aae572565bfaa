pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    question_bank_service::QuestionBankService,
    session_store::{InMemorySessionStore, SessionStore},
};

#[derive(Clone)]
pub struct AppState {
    pub question_bank: QuestionBankService,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(question_bank: QuestionBankService) -> Self {
        Self::with_sessions(question_bank, Arc::new(InMemorySessionStore::new()))
    }

    pub fn with_sessions(
        question_bank: QuestionBankService,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            question_bank,
            sessions,
        }
    }
}
