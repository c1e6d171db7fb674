use crate::shared::config::{BubbleConfig, ConfigError};
use std::time::Duration;
use uuid::Uuid;

/// Default simulated store latency for the demo
const DEFAULT_STORE_LATENCY: Duration = Duration::from_millis(400);

/// Demo application configuration.
///
/// Environment:
/// - `BUBBLE_CONFIG`: path to a TOML file with bubble settings
/// - `BUBBLE_EXIT_MS`: exit animation length, overrides the file
/// - `STORE_LATENCY_MS`: simulated delete latency
/// - `DEV_USER_ID`: viewer id; a random one is generated when unset
#[derive(Debug, Clone)]
pub struct Config {
    bubble: BubbleConfig,
    store_latency: Duration,
    dev_user_id: Option<Uuid>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bubble: BubbleConfig::default(),
            store_latency: DEFAULT_STORE_LATENCY,
            dev_user_id: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps variable names to values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut bubble = match lookup("BUBBLE_CONFIG") {
            Some(path) => {
                let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                BubbleConfig::from_toml_str(&contents)?
            }
            None => BubbleConfig::default(),
        };

        if let Some(ms) = lookup("BUBBLE_EXIT_MS") {
            let ms = parse_millis("BUBBLE_EXIT_MS", &ms)?;
            bubble.exit_duration = Duration::from_millis(ms);
            bubble.validate()?;
        }

        let store_latency = match lookup("STORE_LATENCY_MS") {
            Some(ms) => Duration::from_millis(parse_millis("STORE_LATENCY_MS", &ms)?),
            None => DEFAULT_STORE_LATENCY,
        };

        let dev_user_id = match lookup("DEV_USER_ID") {
            Some(raw) => Some(Uuid::parse_str(raw.trim()).map_err(|e| ConfigError::InvalidValue {
                field: "DEV_USER_ID",
                reason: e.to_string(),
            })?),
            None => None,
        };

        Ok(Self { bubble, store_latency, dev_user_id })
    }

    pub fn bubble(&self) -> &BubbleConfig {
        &self.bubble
    }

    pub fn store_latency(&self) -> Duration {
        self.store_latency
    }

    /// Development user id used as the viewer
    pub fn dev_user_id(&self) -> Option<Uuid> {
        self.dev_user_id
    }
}

fn parse_millis(field: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field,
        reason: format!("'{}' is not a number of milliseconds", raw),
    })
}
