//! Quiz session state machine
//!
//! ```text
//! Idle -> Asking(i) -> { Asking(i + 1) | Completed }
//! ```
//!
//! Transitions return [`QuizEvent`]s and never talk to a UI; the focus
//! controller turns events into notifications.

use crate::models::{Outcome, QuizQuestion, QuizReport};
use crate::quiz::bank;
use crate::{FocusError, Result};

/// Minimum score needed to pass
pub const DEFAULT_PASS_THRESHOLD: usize = 4;

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No question has been presented yet
    Idle,
    /// The question at this index is presented and awaits an answer
    Asking(usize),
    /// Terminal; the outcome has been evaluated
    Completed(Outcome),
}

/// Produced by every session transition
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    QuestionAsked { index: usize, prompt: String },
    AnswerAccepted { index: usize, score: usize },
    AnswerRejected { index: usize },
    Completed(QuizReport),
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    index: usize,
    score: usize,
    phase: QuizPhase,
    pass_threshold: usize,
}

impl QuizSession {
    /// Create an idle session over the given questions
    pub fn new(questions: Vec<QuizQuestion>, pass_threshold: usize) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            phase: QuizPhase::Idle,
            pass_threshold,
        }
    }

    /// A session with no questions, as before any topic is set
    pub fn empty(pass_threshold: usize) -> Self {
        Self::new(Vec::new(), pass_threshold)
    }

    /// Generate a fresh session for a topic
    pub fn for_topic(topic: &str, pass_threshold: usize) -> Self {
        Self::new(bank::generate(topic), pass_threshold)
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the session has no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the next question to answer
    pub fn index(&self) -> usize {
        self.index
    }

    /// Correct answers so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Current phase
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Correct answers needed to pass
    pub fn pass_threshold(&self) -> usize {
        self.pass_threshold
    }

    /// Whether the outcome has been evaluated
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed(_))
    }

    /// Outcome once completed
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            QuizPhase::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The question awaiting an answer, if any
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Asking(index) => self.questions.get(index),
            _ => None,
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Present the current question, or complete the session when every
    /// question has been answered. Returns `None` once completed.
    pub fn ask_question(&mut self) -> Option<QuizEvent> {
        if self.is_completed() {
            return None;
        }

        match self.questions.get(self.index) {
            Some(question) => {
                self.phase = QuizPhase::Asking(self.index);
                Some(QuizEvent::QuestionAsked {
                    index: self.index,
                    prompt: question.prompt().to_string(),
                })
            }
            None => Some(self.complete()),
        }
    }

    /// Check an answer against the current question.
    ///
    /// A correct answer scores, advances and either presents the next
    /// question or completes the session. A wrong answer changes nothing.
    pub fn submit_answer(&mut self, text: &str) -> Result<Vec<QuizEvent>> {
        let index = match self.phase {
            QuizPhase::Asking(index) => index,
            QuizPhase::Idle => {
                return Err(FocusError::QuizNotActive(
                    "no question has been asked yet".to_string(),
                ))
            }
            QuizPhase::Completed(_) => {
                return Err(FocusError::QuizNotActive(
                    "the quiz is already completed".to_string(),
                ))
            }
        };

        let accepted = self
            .questions
            .get(index)
            .map(|q| q.accepts(text))
            .unwrap_or(false);
        if !accepted {
            return Ok(vec![QuizEvent::AnswerRejected { index }]);
        }

        self.score += 1;
        self.index += 1;
        let mut events = vec![QuizEvent::AnswerAccepted {
            index,
            score: self.score,
        }];
        events.extend(self.ask_question());
        Ok(events)
    }

    fn complete(&mut self) -> QuizEvent {
        let report = QuizReport::new(self.score, self.questions.len(), self.pass_threshold);
        self.phase = QuizPhase::Completed(report.outcome);
        QuizEvent::Completed(report)
    }
}
