//! Quiz module
//!
//! Deterministic question generation and the quiz session state machine.

pub mod bank;
pub mod session;

pub use bank::{generate, QUESTIONS_PER_TOPIC};
pub use session::{QuizEvent, QuizPhase, QuizSession, DEFAULT_PASS_THRESHOLD};
