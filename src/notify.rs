//! Notification and access-policy capabilities
//!
//! The focus controller reports everything the user should see through a
//! [`Notifier`], and hands the final quiz report to an [`AccessPolicy`].
//! Neither depends on a UI surface.

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::QuizReport;

/// Receives user-facing messages
pub trait Notifier {
    /// Show a titled message; `message` may be empty
    fn notify(&mut self, title: &str, message: &str);
}

/// Reacts to the final quiz outcome
pub trait AccessPolicy {
    /// Called once when a quiz completes with a pass
    fn on_pass(&mut self, _report: &QuizReport) {}

    /// Called once when a quiz completes with a fail
    fn on_fail(&mut self, report: &QuizReport);
}

/// A single title/message pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Create a notification
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// In-memory FIFO of notifications.
///
/// The TUI shows the front entry as a modal until it is dismissed.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest pending notification
    pub fn front(&self) -> Option<&Notification> {
        self.pending.front()
    }

    /// Remove and return the oldest notification
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    /// Take every pending notification, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    /// Number of pending notifications
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending notification
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, title: &str, message: &str) {
        self.pending.push_back(Notification::new(title, message));
    }
}

/// Writes notifications as lines to a writer
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writer for prompts that are not notifications
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, title: &str, message: &str) {
        let line = if message.is_empty() {
            format!("[{}]", title)
        } else {
            format!("[{}] {}", title, message)
        };
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!(error = %e, "failed to write notification");
        }
    }
}

/// Records a restriction window after a failed quiz without enforcing it
#[derive(Debug, Clone)]
pub struct AdvisoryRestriction {
    window: Duration,
    restricted_until: Option<DateTime<Utc>>,
}

impl AdvisoryRestriction {
    /// Create a policy with no active restriction
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            restricted_until: None,
        }
    }

    /// Length of a restriction
    pub fn window(&self) -> Duration {
        self.window
    }

    /// End of the current restriction, if any
    pub fn restricted_until(&self) -> Option<DateTime<Utc>> {
        self.restricted_until
    }

    /// Whether the advisory restriction is still in effect at `now`
    pub fn is_restricted_at(&self, now: DateTime<Utc>) -> bool {
        self.restricted_until.map(|until| now < until).unwrap_or(false)
    }
}

impl AccessPolicy for AdvisoryRestriction {
    fn on_pass(&mut self, report: &QuizReport) {
        self.restricted_until = None;
        tracing::info!(score = report.score, total = report.total, "access granted");
    }

    fn on_fail(&mut self, report: &QuizReport) {
        let window = chrono::Duration::from_std(self.window).unwrap_or(chrono::Duration::MAX);
        let until = report
            .completed_at
            .checked_add_signed(window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.restricted_until = Some(until);
        tracing::warn!(
            score = report.score,
            total = report.total,
            restricted_until = %until,
            "access restricted (advisory only)"
        );
    }
}
