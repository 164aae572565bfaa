pub mod question_bank_service;
pub mod quiz_service;
pub mod scoring_service;
pub mod session_store;
pub mod submission_service;
