//! Countdown state machine.
//!
//! The countdown does not own a clock; the caller delivers ticks. A tick
//! outside the running state is ignored, so expiry fires exactly once.
//!
//! ```text
//! Stopped -> Running -> (Paused | Expired)
//! ```

use crate::{FocusError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started { duration_secs: u64 },
    Paused { remaining_secs: u64 },
    Expired,
}

/// Remaining seconds plus a running flag.
///
/// `running` is only ever true while `remaining > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    running: bool,
}

impl Countdown {
    /// Stopped countdown at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds left
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether ticks are being counted
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin counting down from `duration_secs`
    pub fn start(&mut self, duration_secs: u64) -> Result<TimerEvent> {
        if duration_secs == 0 {
            return Err(FocusError::InvalidInput(
                "duration must be greater than 0".to_string(),
            ));
        }
        self.remaining = duration_secs;
        self.running = true;
        Ok(TimerEvent::Started { duration_secs })
    }

    /// Parse duration text and start; state is untouched on bad input
    pub fn start_from_input(&mut self, input: &str) -> Result<TimerEvent> {
        let duration_secs = parse_duration_input(input)?;
        self.start(duration_secs)
    }

    /// Decrement by one second. Returns `Expired` on the tick that reaches 0.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return Some(TimerEvent::Expired);
        }
        None
    }

    /// Stop counting, keeping the remaining time
    pub fn pause(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(TimerEvent::Paused {
            remaining_secs: self.remaining,
        })
    }

    /// Stop and set the remaining time without raising anything
    pub fn reset(&mut self, duration_secs: u64) {
        self.remaining = duration_secs;
        self.running = false;
    }
}

/// Parse user-entered duration text as a positive number of seconds
pub fn parse_duration_input(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        FocusError::InvalidInput(format!("'{}' is not a whole number of seconds", trimmed))
    })?;
    if value <= 0 {
        return Err(FocusError::InvalidInput(format!(
            "duration must be positive, got {}",
            value
        )));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_sets_running() {
        let mut countdown = Countdown::new();
        let event = countdown.start(3).unwrap();
        assert_eq!(event, TimerEvent::Started { duration_secs: 3 });
        assert_eq!(countdown.remaining(), 3);
        assert!(countdown.is_running());
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut countdown = Countdown::new();
        countdown.start(3).unwrap();
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), Some(TimerEvent::Expired));
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), 0);
        // Late ticks are ignored
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_invalid_start_leaves_state() {
        let mut countdown = Countdown::new();
        countdown.start(10).unwrap();
        countdown.tick();
        let before = countdown.clone();

        assert!(matches!(
            countdown.start_from_input("-1"),
            Err(FocusError::InvalidInput(_))
        ));
        assert!(countdown.start(0).is_err());
        assert!(countdown.start_from_input("ten").is_err());
        assert!(countdown.start_from_input("").is_err());
        assert_eq!(countdown, before);
    }

    #[test]
    fn test_pause_and_reset() {
        let mut countdown = Countdown::new();
        countdown.start(5).unwrap();
        countdown.tick();
        assert_eq!(
            countdown.pause(),
            Some(TimerEvent::Paused { remaining_secs: 4 })
        );
        assert_eq!(countdown.pause(), None);
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.remaining(), 4);

        countdown.reset(30);
        assert_eq!(countdown.remaining(), 30);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_parse_duration_input() {
        assert_eq!(parse_duration_input("25").unwrap(), 25);
        assert_eq!(parse_duration_input("  7 ").unwrap(), 7);
        assert!(parse_duration_input("0").is_err());
        assert!(parse_duration_input("-3").is_err());
        assert!(parse_duration_input("1.5").is_err());
        assert!(parse_duration_input("12abc").is_err());
    }
}
