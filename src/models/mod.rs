pub mod question;
pub mod quiz_attempt;
pub mod scored_result;
