//! Configuration management module
//!
//! Handles loading, saving, and validation of focus-mode settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::quiz::{DEFAULT_PASS_THRESHOLD, QUESTIONS_PER_TOPIC};
use crate::{FocusError, Result, APP_NAME, CONFIG_FILE};

/// Focus-mode settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Length of one countdown tick in milliseconds
    pub tick_interval_ms: u64,
    /// Correct answers needed to pass the quiz
    pub pass_threshold: usize,
    /// How long access stays restricted after a failed quiz ("1h", "30m", ...)
    pub restriction_window: String,
    /// Prefills the duration field on the focus screen
    pub default_duration_secs: Option<u64>,
    /// tracing-subscriber filter directive; RUST_LOG takes precedence
    pub log_filter: String,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            restriction_window: "1h".to_string(),
            default_duration_secs: None,
            log_filter: "info".to_string(),
        }
    }
}

impl FocusConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        const MAX_TICK_MS: u64 = 60_000;
        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_MS {
            return Err(FocusError::ConfigError(format!(
                "Tick interval must be between 1 and {} ms",
                MAX_TICK_MS
            )));
        }

        if self.pass_threshold == 0 || self.pass_threshold > QUESTIONS_PER_TOPIC {
            return Err(FocusError::ConfigError(format!(
                "Pass threshold must be between 1 and {}",
                QUESTIONS_PER_TOPIC
            )));
        }

        if self.restriction_window()?.is_zero() {
            return Err(FocusError::ConfigError(
                "Restriction window must be greater than 0".to_string(),
            ));
        }

        if self.default_duration_secs == Some(0) {
            return Err(FocusError::ConfigError(
                "Default duration must be greater than 0".to_string(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(FocusError::ConfigError(
                "Log filter must not be empty".to_string(),
            ));
        }
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            FocusError::ConfigError(format!("Invalid log filter '{}': {}", self.log_filter, e))
        })?;

        Ok(())
    }

    /// Tick period as a Duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Parse the restriction window
    pub fn restriction_window(&self) -> Result<Duration> {
        humantime::parse_duration(self.restriction_window.trim()).map_err(|e| {
            FocusError::ConfigError(format!(
                "Invalid restriction window '{}': {}",
                self.restriction_window, e
            ))
        })
    }

    /// Human-readable restriction window for messages
    pub fn restriction_window_text(&self) -> String {
        match self.restriction_window() {
            Ok(window) => describe_window(window),
            Err(_) => self.restriction_window.clone(),
        }
    }

    /// Set the tick interval
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        // Out-of-range values saturate so validate() still rejects them
        self.tick_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the pass threshold
    pub fn with_pass_threshold(mut self, threshold: usize) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Set the restriction window
    pub fn with_restriction_window(mut self, window: Duration) -> Self {
        self.restriction_window = humantime::format_duration(window).to_string();
        self
    }

    /// Set the prefilled duration
    pub fn with_default_duration(mut self, secs: u64) -> Self {
        self.default_duration_secs = Some(secs);
        self
    }

    /// Set the log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            FocusError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            FocusError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FocusError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            FocusError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/focusgate/focusgate.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FocusError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// "1 hour", "30 minutes", or humantime's compact form for odd values
fn describe_window(window: Duration) -> String {
    let secs = window.as_secs();
    let plural = |n: u64, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };
    if secs > 0 && window.subsec_nanos() == 0 {
        if secs % 3600 == 0 {
            return plural(secs / 3600, "hour");
        }
        if secs % 60 == 0 {
            return plural(secs / 60, "minute");
        }
    }
    humantime::format_duration(window).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = FocusConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.pass_threshold, 4);
        assert_eq!(config.restriction_window().unwrap(), Duration::from_secs(3600));
        assert_eq!(config.restriction_window_text(), "1 hour");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(FocusConfig::new().with_pass_threshold(0).validate().is_err());
        assert!(FocusConfig::new().with_pass_threshold(6).validate().is_err());
        assert!(FocusConfig::new()
            .with_tick_interval(Duration::ZERO)
            .validate()
            .is_err());
        assert!(FocusConfig::new().with_default_duration(0).validate().is_err());
        assert!(FocusConfig::new().with_log_filter(" ").validate().is_err());
        assert!(matches!(
            FocusConfig::new().with_log_filter("focusgate=loud").validate(),
            Err(FocusError::ConfigError(_))
        ));
        assert!(FocusConfig::new()
            .with_log_filter("focusgate=debug,warn")
            .validate()
            .is_ok());

        let mut config = FocusConfig::new();
        config.restriction_window = "soon".to_string();
        assert!(matches!(config.validate(), Err(FocusError::ConfigError(_))));
    }

    #[test]
    fn test_huge_tick_interval_is_rejected() {
        let config = FocusConfig::new().with_tick_interval(Duration::from_secs(u64::MAX));
        assert_eq!(config.tick_interval_ms, u64::MAX);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let config = FocusConfig::new()
            .with_pass_threshold(3)
            .with_default_duration(25)
            .with_restriction_window(Duration::from_secs(30 * 60));
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: FocusConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
        assert_eq!(deserialized.restriction_window_text(), "30 minutes");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "pass_threshold = 5\n").unwrap();

        let config = FocusConfig::load_from(&path).unwrap();
        assert_eq!(config.pass_threshold, 5);
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.restriction_window, "1h");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = FocusConfig::load_from(&temp_dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, FocusConfig::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "pass_threshold = \"many\"\n").unwrap();
        assert!(matches!(
            FocusConfig::load_from(&path),
            Err(FocusError::ConfigError(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);
        let config = FocusConfig::new().with_default_duration(90);
        config.save_to(&path).unwrap();
        assert_eq!(FocusConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_config_file_path() {
        let path = FocusConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("focusgate.toml"));
    }
}
