//! Quiz data models
//!
//! Questions are immutable once generated. A report is produced exactly
//! once, when a session reaches its terminal state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A prompt paired with the answer that is accepted for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    prompt: String,
    expected_answer: String,
}

impl QuizQuestion {
    /// Create a question with its expected answer
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// Text shown to the user
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer as stored, before normalisation
    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    /// Check an answer, ignoring surrounding whitespace and case
    pub fn accepts(&self, answer: &str) -> bool {
        normalize_answer(answer) == normalize_answer(&self.expected_answer)
    }
}

/// Normalize answer text for comparison
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Final result of a quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Enough correct answers; access to other apps is granted
    Pass,
    /// Too few correct answers; access is (advisorily) restricted
    Fail,
}

impl Outcome {
    /// Evaluate a score against the pass threshold
    pub fn evaluate(score: usize, pass_threshold: usize) -> Self {
        if score >= pass_threshold {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }

    /// Whether this outcome grants access
    pub fn is_pass(self) -> bool {
        self == Outcome::Pass
    }
}

/// Summary handed to notifiers and the access policy on completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub outcome: Outcome,
    pub completed_at: DateTime<Utc>,
}

impl QuizReport {
    /// Evaluate a finished quiz, stamped with the current time
    pub fn new(score: usize, total: usize, pass_threshold: usize) -> Self {
        Self {
            score,
            total,
            outcome: Outcome::evaluate(score, pass_threshold),
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ignores_case_and_whitespace() {
        let q = QuizQuestion::new("What is the phylum of the frog?", "Chordata");
        assert!(q.accepts("chordata"));
        assert!(q.accepts("  CHORDATA \n"));
        assert!(!q.accepts("chord ata"));
        assert!(!q.accepts(""));
    }

    #[test]
    fn test_outcome_threshold() {
        assert_eq!(Outcome::evaluate(4, 4), Outcome::Pass);
        assert_eq!(Outcome::evaluate(5, 4), Outcome::Pass);
        assert_eq!(Outcome::evaluate(3, 4), Outcome::Fail);
        assert_eq!(Outcome::evaluate(0, 4), Outcome::Fail);
    }

    #[test]
    fn test_report_outcome() {
        let report = QuizReport::new(0, 0, 4);
        assert_eq!(report.outcome, Outcome::Fail);
        assert!(QuizReport::new(5, 5, 4).outcome.is_pass());
    }
}
