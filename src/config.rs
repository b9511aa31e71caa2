//! Configuration management and validation.
//!
//! Provides configuration structures for the schedule source fetch and the
//! sample fallback behavior. Defaults come from [`crate::constants`] and CLI
//! arguments layer overrides on top.

use crate::constants::{
    DEFAULT_TIMEOUT_SECS, FALLBACK_DELAY_MS, MAX_RETRY_ATTEMPTS, RETRY_DELAY_MS, USER_AGENT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Schedule source fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Total number of fetch attempts before giving up
    pub max_retries: usize,

    /// Delay between fetch attempts in milliseconds
    pub retry_delay_ms: u64,

    /// User agent header sent with source requests
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: MAX_RETRY_ATTEMPTS,
            retry_delay_ms: RETRY_DELAY_MS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Sample fallback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Render the embedded sample schedule when the live source fails
    pub enabled: bool,

    /// Delay before rendering the fallback in milliseconds
    pub delay_ms: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: FALLBACK_DELAY_MS,
        }
    }
}

/// Global configuration for schedule processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source fetch settings
    pub source: SourceConfig,

    /// Fallback behavior settings
    pub fallback: FallbackConfig,
}

impl Config {
    /// Create configuration with a custom request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.source.timeout_secs = timeout_secs;
        self
    }

    /// Create configuration with a custom attempt count
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.source.max_retries = max_retries;
        self
    }

    /// Create configuration with a custom delay between attempts
    pub fn with_retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.source.retry_delay_ms = retry_delay_ms;
        self
    }

    /// Disable the sample fallback
    pub fn without_fallback(mut self) -> Self {
        self.fallback.enabled = false;
        self
    }

    /// Create configuration with a custom fallback delay
    pub fn with_fallback_delay_ms(mut self, delay_ms: u64) -> Self {
        self.fallback.delay_ms = delay_ms;
        self
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source.timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.source.max_retries == 0 {
            return Err(Error::configuration(
                "At least one fetch attempt is required".to_string(),
            ));
        }

        if self.source.user_agent.trim().is_empty() {
            return Err(Error::configuration(
                "User agent cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
