pub mod fallback;
pub mod health;
pub mod quest;
pub mod questions;
pub mod quiz;
