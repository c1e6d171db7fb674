//! Bubble configuration module
//!
//! Provides the tunables of the message bubble: exit animation length, time label
//! pattern, layout width, and the text shown when a delete fails.

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default exit animation length
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(300);
/// Default strftime pattern for the time label
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
/// Default share of the available width a bubble may take
pub const DEFAULT_MAX_WIDTH_RATIO: f32 = 0.7;
/// Default notification text for a failed delete
pub const DEFAULT_DELETE_FAILED_TEXT: &str = "Failed to delete message";
/// Default number of notifications kept on screen
pub const DEFAULT_TOAST_CAPACITY: usize = 5;

/// Upper bound for the exit animation
const MAX_EXIT_DURATION: Duration = Duration::from_secs(5);

/// Bubble configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleConfig {
    /// How long the removal fade runs before the store is asked to delete
    pub exit_duration: Duration,
    /// strftime pattern for the time label
    pub time_format: String,
    /// Maximum bubble width as a share of the available width
    pub max_width_ratio: f32,
    /// Text reported when a delete cannot start or commit
    pub delete_failed_text: String,
    /// Maximum notifications kept by the toast sink
    pub toast_capacity: usize,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            exit_duration: DEFAULT_EXIT_DURATION,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            max_width_ratio: DEFAULT_MAX_WIDTH_RATIO,
            delete_failed_text: DEFAULT_DELETE_FAILED_TEXT.to_string(),
            toast_capacity: DEFAULT_TOAST_CAPACITY,
        }
    }
}

impl BubbleConfig {
    /// Create a new BubbleConfigBuilder
    pub fn builder() -> BubbleConfigBuilder {
        BubbleConfigBuilder::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut builder = Self::builder();
        if let Some(ms) = file.exit_duration_ms {
            builder = builder.exit_duration(Duration::from_millis(ms));
        }
        if let Some(format) = file.time_format {
            builder = builder.time_format(format);
        }
        if let Some(ratio) = file.max_width_ratio {
            builder = builder.max_width_ratio(ratio);
        }
        if let Some(text) = file.delete_failed_text {
            builder = builder.delete_failed_text(text);
        }
        if let Some(capacity) = file.toast_capacity {
            builder = builder.toast_capacity(capacity);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exit_duration.is_zero() || self.exit_duration > MAX_EXIT_DURATION {
            return Err(ConfigError::InvalidValue {
                field: "exit_duration",
                reason: format!("must be within 1ms..={}ms", MAX_EXIT_DURATION.as_millis()),
            });
        }
        if self.time_format.trim().is_empty() {
            return Err(ConfigError::MissingValue("time_format"));
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                field: "time_format",
                reason: format!("'{}' is not a valid strftime pattern", self.time_format),
            });
        }
        if !(self.max_width_ratio > 0.0 && self.max_width_ratio <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "max_width_ratio",
                reason: format!("{} is outside (0, 1]", self.max_width_ratio),
            });
        }
        if self.delete_failed_text.trim().is_empty() {
            return Err(ConfigError::MissingValue("delete_failed_text"));
        }
        if self.toast_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "toast_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// On-disk shape of the configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    exit_duration_ms: Option<u64>,
    time_format: Option<String>,
    max_width_ratio: Option<f32>,
    delete_failed_text: Option<String>,
    toast_capacity: Option<usize>,
}

/// Builder for BubbleConfig
#[derive(Debug, Default)]
pub struct BubbleConfigBuilder {
    exit_duration: Option<Duration>,
    time_format: Option<String>,
    max_width_ratio: Option<f32>,
    delete_failed_text: Option<String>,
    toast_capacity: Option<usize>,
}

impl BubbleConfigBuilder {
    /// Set the exit animation length
    pub fn exit_duration(mut self, duration: Duration) -> Self {
        self.exit_duration = Some(duration);
        self
    }

    /// Set the time label pattern
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    /// Set the maximum width ratio
    pub fn max_width_ratio(mut self, ratio: f32) -> Self {
        self.max_width_ratio = Some(ratio);
        self
    }

    /// Set the delete failure text
    pub fn delete_failed_text(mut self, text: impl Into<String>) -> Self {
        self.delete_failed_text = Some(text.into());
        self
    }

    /// Set the toast capacity
    pub fn toast_capacity(mut self, capacity: usize) -> Self {
        self.toast_capacity = Some(capacity);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<BubbleConfig, ConfigError> {
        let defaults = BubbleConfig::default();
        let config = BubbleConfig {
            exit_duration: self.exit_duration.unwrap_or(defaults.exit_duration),
            time_format: self.time_format.unwrap_or(defaults.time_format),
            max_width_ratio: self.max_width_ratio.unwrap_or(defaults.max_width_ratio),
            delete_failed_text: self.delete_failed_text.unwrap_or(defaults.delete_failed_text),
            toast_capacity: self.toast_capacity.unwrap_or(defaults.toast_capacity),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },
}
