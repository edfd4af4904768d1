//! focusgate - Focus Mode in the terminal
//!
//! A countdown timer followed by a topic quiz. Passing the quiz grants
//! access to other apps; failing it records an advisory restriction.

use thiserror::Error;

pub mod app;
pub mod config;
pub mod console;
pub mod focus;
pub mod logging;
pub mod models;
pub mod notify;
pub mod quiz;
pub mod timer;

// Common error types
#[derive(Debug, Error)]
pub enum FocusError {
    /// Duration text was not a positive whole number of seconds
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An answer was submitted while no question was being asked
    #[error("No active question: {0}")]
    QuizNotActive(String),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Periodic ticker could not be started
    #[error("Ticker error: {0}")]
    TickerError(String),
    /// Log subscriber could not be installed
    #[error("Logging error: {0}")]
    LoggingError(String),
    /// I/O operation failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for FocusError {
    fn from(err: toml::de::Error) -> Self {
        FocusError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for FocusError {
    fn from(err: toml::ser::Error) -> Self {
        FocusError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for focusgate operations
pub type Result<T> = std::result::Result<T, FocusError>;

/// Error handling utilities
pub mod error {
    use super::FocusError;

    /// Convert error to the message shown to the user
    pub fn user_friendly_message(error: &FocusError) -> String {
        match error {
            FocusError::InvalidInput(_) => "Please enter a valid time.".to_string(),
            FocusError::QuizNotActive(_) => {
                "Start the timer and wait for it to finish before answering.".to_string()
            }
            FocusError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            FocusError::LoggingError(_) => {
                "Could not open the log file. Continuing without logging.".to_string()
            }
            _ => error.to_string(),
        }
    }

    /// Title used when an error is surfaced through a notifier
    pub fn notification_title(error: &FocusError) -> &'static str {
        match error {
            FocusError::QuizNotActive(_) => "Quiz",
            _ => "Error",
        }
    }
}

// Common types and constants
/// Directory name under the config and data dirs
pub const APP_NAME: &str = "focusgate";
/// Configuration file name
pub const CONFIG_FILE: &str = "focusgate.toml";
/// Log file name
pub const LOG_FILE: &str = "focusgate.log";
