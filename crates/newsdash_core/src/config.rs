//! Feed session configuration.
//!
//! # Responsibility
//! - Carry the tunables of a dashboard session with reference defaults.
//! - Parse partial JSON overrides at the boundary and validate them once.
//!
//! # Invariants
//! - A constructed `FeedConfig` is always valid: non-negative threshold and
//!   a non-blank viewer name.

use crate::feed::filter::DEFAULT_TRENDING_THRESHOLD;
use crate::store::seed::PLACEHOLDER_AVATAR;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Simulated feed load delay in milliseconds.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 500;
/// Display name attached to comments written in this session.
pub const DEFAULT_VIEWER_NAME: &str = "You";

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    NegativeTrendingThreshold(i64),
    BlankViewerName,
    /// Input is not valid JSON for the config shape.
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeTrendingThreshold(value) => {
                write!(f, "trending_threshold must be >= 0, got {value}")
            }
            Self::BlankViewerName => write!(f, "viewer_name must not be blank"),
            Self::Parse(err) => write!(f, "invalid feed config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFeedConfig {
    #[serde(default = "default_trending_threshold")]
    trending_threshold: i64,
    #[serde(default = "default_load_delay_ms")]
    load_delay_ms: u64,
    #[serde(default = "default_viewer_name")]
    viewer_name: String,
    #[serde(default = "default_viewer_avatar")]
    viewer_avatar: String,
}

fn default_trending_threshold() -> i64 {
    DEFAULT_TRENDING_THRESHOLD
}

fn default_load_delay_ms() -> u64 {
    DEFAULT_LOAD_DELAY_MS
}

fn default_viewer_name() -> String {
    DEFAULT_VIEWER_NAME.to_string()
}

fn default_viewer_avatar() -> String {
    PLACEHOLDER_AVATAR.to_string()
}

/// Validated session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFeedConfig")]
pub struct FeedConfig {
    trending_threshold: i64,
    load_delay_ms: u64,
    viewer_name: String,
    viewer_avatar: String,
}

impl TryFrom<RawFeedConfig> for FeedConfig {
    type Error = ConfigError;

    fn try_from(raw: RawFeedConfig) -> Result<Self, Self::Error> {
        if raw.trending_threshold < 0 {
            return Err(ConfigError::NegativeTrendingThreshold(
                raw.trending_threshold,
            ));
        }
        let viewer_name = raw.viewer_name.trim().to_string();
        if viewer_name.is_empty() {
            return Err(ConfigError::BlankViewerName);
        }
        Ok(Self {
            trending_threshold: raw.trending_threshold,
            load_delay_ms: raw.load_delay_ms,
            viewer_name,
            viewer_avatar: raw.viewer_avatar,
        })
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            trending_threshold: DEFAULT_TRENDING_THRESHOLD,
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            viewer_name: default_viewer_name(),
            viewer_avatar: default_viewer_avatar(),
        }
    }
}

impl FeedConfig {
    /// Parses a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown fields.
    /// - `ConfigError::NegativeTrendingThreshold` / `BlankViewerName` for
    ///   well-formed input with invalid values.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawFeedConfig = serde_json::from_str(input)?;
        Self::try_from(raw)
    }

    /// Returns this config with a different load delay.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn trending_threshold(&self) -> i64 {
        self.trending_threshold
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn viewer_name(&self) -> &str {
        &self.viewer_name
    }

    pub fn viewer_avatar(&self) -> &str {
        &self.viewer_avatar
    }
}
