pub mod question_dto;
pub mod quiz_dto;
