//! Data models module
//!
//! Contains the quiz question and quiz report types shared by the
//! question bank, the session state machine and the front ends.

pub mod quiz;

// Re-export commonly used types
pub use quiz::{normalize_answer, Outcome, QuizQuestion, QuizReport};
