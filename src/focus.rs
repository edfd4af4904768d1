//! Focus Mode controller
//!
//! Owns the countdown, the quiz session and the three text inputs, and maps
//! user actions onto them. Every user-visible outcome goes through the
//! injected [`Notifier`]; the final result also goes to the [`AccessPolicy`].
//!
//! The controller has no clock. The owner delivers ticks with [`FocusMode::tick`]
//! while [`FocusMode::is_running`] is true.

use crate::config::FocusConfig;
use crate::error::{notification_title, user_friendly_message};
use crate::models::{Outcome, QuizReport};
use crate::notify::{AccessPolicy, Notifier};
use crate::quiz::{QuizEvent, QuizSession};
use crate::timer::{parse_duration_input, Countdown, TimerEvent};
use crate::Result;

/// Shown when the quiz completes with a pass
pub const PASS_MESSAGE: &str =
    "You answered enough questions correctly! You can now access other apps.";

/// Text inputs on the focus screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Topic,
    Duration,
    Answer,
}

impl InputField {
    /// Fields in screen order
    pub fn all() -> [Self; 3] {
        [Self::Topic, Self::Duration, Self::Answer]
    }

    /// Field title
    pub fn label(self) -> &'static str {
        match self {
            Self::Topic => "Topic",
            Self::Duration => "Time (seconds)",
            Self::Answer => "Your answer",
        }
    }

    /// Next field, wrapping
    pub fn next(self) -> Self {
        match self {
            Self::Topic => Self::Duration,
            Self::Duration => Self::Answer,
            Self::Answer => Self::Topic,
        }
    }

    /// Previous field, wrapping
    pub fn previous(self) -> Self {
        match self {
            Self::Topic => Self::Answer,
            Self::Duration => Self::Topic,
            Self::Answer => Self::Duration,
        }
    }
}

/// Focus Mode controller
pub struct FocusMode<N: Notifier, P: AccessPolicy> {
    countdown: Countdown,
    session: QuizSession,
    topic_input: String,
    duration_input: String,
    answer_input: String,
    active_topic: Option<String>,
    last_report: Option<QuizReport>,
    pass_threshold: usize,
    restriction_text: String,
    notifier: N,
    policy: P,
}

impl<N: Notifier, P: AccessPolicy> FocusMode<N, P> {
    /// Create a controller with an empty session; the duration input is
    /// prefilled from `default_duration_secs`
    pub fn new(config: &FocusConfig, notifier: N, policy: P) -> Self {
        Self {
            countdown: Countdown::new(),
            session: QuizSession::empty(config.pass_threshold),
            topic_input: String::new(),
            duration_input: config
                .default_duration_secs
                .map(|secs| secs.to_string())
                .unwrap_or_default(),
            answer_input: String::new(),
            active_topic: None,
            last_report: None,
            pass_threshold: config.pass_threshold,
            restriction_text: config.restriction_window_text(),
            notifier,
            policy,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Countdown state
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Whether ticks should be delivered
    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Seconds left on the countdown
    pub fn remaining(&self) -> u64 {
        self.countdown.remaining()
    }

    /// Current quiz session
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Topic of the current question set, once one has been set
    pub fn active_topic(&self) -> Option<&str> {
        self.active_topic.as_deref()
    }

    /// Report of the last completed quiz
    pub fn last_report(&self) -> Option<&QuizReport> {
        self.last_report.as_ref()
    }

    /// Text of an input field
    pub fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Topic => &self.topic_input,
            InputField::Duration => &self.duration_input,
            InputField::Answer => &self.answer_input,
        }
    }

    /// Mutable text of an input field
    pub fn input_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Topic => &mut self.topic_input,
            InputField::Duration => &mut self.duration_input,
            InputField::Answer => &mut self.answer_input,
        }
    }

    /// Replace the text of an input field
    pub fn set_input(&mut self, field: InputField, text: impl Into<String>) {
        *self.input_mut(field) = text.into();
    }

    /// Notification sink
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable notification sink
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Access policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Generate a fresh question set from the topic input
    pub fn set_topic(&mut self) {
        let topic = self.topic_input.trim().to_string();
        self.session = QuizSession::for_topic(&topic, self.pass_threshold);
        self.answer_input.clear();
        self.last_report = None;
        tracing::info!(topic = %topic, questions = self.session.len(), "topic set");
        self.active_topic = Some(topic);
    }

    /// Start from the duration input, or pause when already running.
    ///
    /// Bad duration text is reported and leaves the countdown untouched.
    pub fn toggle_timer(&mut self) -> Result<()> {
        if let Some(TimerEvent::Paused { remaining_secs }) = self.countdown.pause() {
            tracing::info!(remaining_secs, "timer paused");
            return Ok(());
        }

        match self.countdown.start_from_input(&self.duration_input) {
            Ok(TimerEvent::Started { duration_secs }) => {
                tracing::info!(duration_secs, "timer started");
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::debug!(input = %self.duration_input, error = %err, "rejected duration");
                self.report_error(&err);
                Err(err)
            }
        }
    }

    /// Stop and rewind to the duration input (0 when it is not a valid time)
    pub fn reset_timer(&mut self) {
        let duration_secs = parse_duration_input(&self.duration_input).unwrap_or(0);
        self.countdown.reset(duration_secs);
        tracing::info!(duration_secs, "timer reset");
    }

    /// Deliver one tick; expiry presents the quiz
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let event = self.countdown.tick();
        if event == Some(TimerEvent::Expired) {
            tracing::info!("timer expired");
            self.ask_question();
        }
        event
    }

    /// Present the current question, or the final outcome
    pub fn ask_question(&mut self) {
        if let Some(event) = self.session.ask_question() {
            self.announce(event);
        }
    }

    /// Check the answer input against the current question
    pub fn submit_answer(&mut self) -> Result<()> {
        match self.session.submit_answer(&self.answer_input) {
            Ok(events) => {
                if matches!(events.first(), Some(QuizEvent::AnswerAccepted { .. })) {
                    self.answer_input.clear();
                }
                for event in events {
                    self.announce(event);
                }
                Ok(())
            }
            Err(err) => {
                self.report_error(&err);
                Err(err)
            }
        }
    }

    fn announce(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::QuestionAsked { index, prompt } => {
                tracing::debug!(index, "question asked");
                self.notifier.notify("Question", &prompt);
            }
            QuizEvent::AnswerAccepted { index, score } => {
                tracing::info!(index, score, "answer accepted");
                self.notifier.notify("Correct Answer!", "");
            }
            QuizEvent::AnswerRejected { index } => {
                tracing::info!(index, "answer rejected");
                self.notifier.notify("Incorrect Answer. Try Again.", "");
            }
            QuizEvent::Completed(report) => {
                tracing::info!(
                    score = report.score,
                    total = report.total,
                    outcome = ?report.outcome,
                    "quiz completed"
                );
                match report.outcome {
                    Outcome::Pass => {
                        self.notifier.notify("Quiz Completed", PASS_MESSAGE);
                        self.policy.on_pass(&report);
                    }
                    Outcome::Fail => {
                        let message = format!(
                            "Not enough correct answers. You are restricted from using other apps for {}.",
                            self.restriction_text
                        );
                        self.notifier.notify("Quiz Completed", &message);
                        self.policy.on_fail(&report);
                    }
                }
                self.last_report = Some(report);
            }
        }
    }

    fn report_error(&mut self, err: &crate::FocusError) {
        self.notifier
            .notify(notification_title(err), &user_friendly_message(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationQueue;

    #[derive(Default)]
    struct CountingPolicy {
        passes: usize,
        fails: usize,
    }

    impl AccessPolicy for CountingPolicy {
        fn on_pass(&mut self, _report: &QuizReport) {
            self.passes += 1;
        }

        fn on_fail(&mut self, _report: &QuizReport) {
            self.fails += 1;
        }
    }

    fn focus() -> FocusMode<NotificationQueue, CountingPolicy> {
        FocusMode::new(
            &FocusConfig::default(),
            NotificationQueue::new(),
            CountingPolicy::default(),
        )
    }

    #[test]
    fn test_invalid_duration_notifies() {
        let mut focus = focus();
        focus.set_input(InputField::Duration, "abc");
        assert!(focus.toggle_timer().is_err());
        assert!(!focus.is_running());
        let note = focus.notifier_mut().dismiss().unwrap();
        assert_eq!(note.title, "Error");
        assert_eq!(note.message, "Please enter a valid time.");
    }

    #[test]
    fn test_toggle_pauses_then_restarts() {
        let mut focus = focus();
        focus.set_input(InputField::Duration, "10");
        focus.toggle_timer().unwrap();
        focus.tick();
        assert_eq!(focus.remaining(), 9);

        focus.toggle_timer().unwrap();
        assert!(!focus.is_running());
        assert_eq!(focus.remaining(), 9);

        focus.toggle_timer().unwrap();
        assert!(focus.is_running());
        assert_eq!(focus.remaining(), 10);
    }

    #[test]
    fn test_reset_uses_duration_input() {
        let mut focus = focus();
        focus.set_input(InputField::Duration, "5");
        focus.toggle_timer().unwrap();
        focus.tick();
        focus.reset_timer();
        assert!(!focus.is_running());
        assert_eq!(focus.remaining(), 5);

        focus.set_input(InputField::Duration, "");
        focus.reset_timer();
        assert_eq!(focus.remaining(), 0);
        assert!(focus.notifier().is_empty());
    }

    #[test]
    fn test_expiry_presents_first_question() {
        let mut focus = focus();
        focus.set_input(InputField::Topic, "frog");
        focus.set_topic();
        focus.set_input(InputField::Duration, "1");
        focus.toggle_timer().unwrap();
        assert_eq!(focus.tick(), Some(TimerEvent::Expired));

        let note = focus.notifier_mut().dismiss().unwrap();
        assert_eq!(note.title, "Question");
        assert_eq!(note.message, "What is the phylum of the frog?");
    }

    #[test]
    fn test_answer_before_expiry_is_reported() {
        let mut focus = focus();
        focus.set_input(InputField::Topic, "frog");
        focus.set_topic();
        focus.set_input(InputField::Answer, "Chordata");
        assert!(focus.submit_answer().is_err());
        assert_eq!(focus.session().score(), 0);
        assert_eq!(focus.notifier().front().unwrap().title, "Quiz");
    }

    #[test]
    fn test_completion_calls_policy_once() {
        let mut focus = focus();
        focus.set_input(InputField::Duration, "1");
        focus.toggle_timer().unwrap();
        focus.tick();
        focus.ask_question();
        assert_eq!(focus.policy().fails, 1);
        assert_eq!(focus.policy().passes, 0);

        let notes = focus.notifier_mut().drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Quiz Completed");
        assert!(notes[0].message.contains("1 hour"));
    }

    #[test]
    fn test_new_topic_resets_session() {
        let mut focus = focus();
        focus.set_input(InputField::Topic, "frog");
        focus.set_topic();
        focus.set_input(InputField::Duration, "1");
        focus.toggle_timer().unwrap();
        focus.tick();
        focus.set_input(InputField::Answer, "chordata");
        focus.submit_answer().unwrap();
        assert_eq!(focus.session().score(), 1);
        assert_eq!(focus.input(InputField::Answer), "");

        focus.set_input(InputField::Topic, "history");
        focus.set_topic();
        assert_eq!(focus.active_topic(), Some("history"));
        assert_eq!(focus.session().score(), 0);
        assert_eq!(focus.session().index(), 0);
    }

    #[test]
    fn test_default_duration_prefills_input() {
        let config = FocusConfig::default().with_default_duration(25);
        let focus = FocusMode::new(&config, NotificationQueue::new(), CountingPolicy::default());
        assert_eq!(focus.input(InputField::Duration), "25");
    }
}
