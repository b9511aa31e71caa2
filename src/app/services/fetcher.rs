//! Schedule source fetching with retry and sample fallback
//!
//! This module retrieves the published CSV payload over HTTP. Transient
//! transport failures are retried a bounded number of times; callers that
//! still end up without usable data can fall back to the embedded sample
//! schedule, which runs through the normal parsing pipeline.

use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::schedule_parser::{ParseResult, parse_schedule};
use crate::config::SourceConfig;
use crate::constants::SAMPLE_CSV;
use crate::{Error, Result};

/// HTTP fetcher for published schedule sheets
#[derive(Debug, Clone)]
pub struct ScheduleFetcher {
    client: Client,
    config: SourceConfig,
}

impl ScheduleFetcher {
    /// Create a fetcher from source configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|error| {
                Error::transport("", "failed to build HTTP client", Some(error))
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetch the raw CSV payload from a published source URL
    ///
    /// Send failures are retried up to the configured attempt count with a
    /// fixed delay between attempts. Error statuses and empty bodies are
    /// definitive responses and fail immediately.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching schedule source: {}", url);

        let mut attempt = 0;
        let response = loop {
            attempt += 1;
            match self.client.get(url).send().await {
                Ok(response) => break response.error_for_status()?,
                Err(error) if attempt < self.config.max_retries => {
                    warn!(
                        "Fetch attempt {}/{} failed: {}",
                        attempt, self.config.max_retries, error
                    );
                    sleep(Duration::from_millis(self.config.retry_delay_ms)).await;
                }
                Err(error) => return Err(error.into()),
            }
        };

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(Error::empty_payload(url));
        }

        debug!("Fetched {} bytes from source", body.len());
        Ok(body)
    }
}

/// Parse the embedded sample schedule
///
/// Used when the live source cannot be fetched or yields no activities.
pub fn fallback_schedule() -> ParseResult {
    parse_schedule(SAMPLE_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_construction() {
        let fetcher = ScheduleFetcher::new(&SourceConfig::default());
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_fallback_schedule_parses() {
        let result = fallback_schedule();

        assert_eq!(result.schedule.day_count(), 2);
        assert_eq!(result.schedule.activity_count(), 5);
        assert_eq!(result.stats.rows_parsed, 5);
        assert!(result.stats.is_successful());

        let labels: Vec<&str> = result.schedule.day_labels().collect();
        assert_eq!(labels, vec!["Monday - August 12", "Tuesday - August 13"]);
    }

    #[test]
    fn test_fallback_first_activity_fields() {
        let result = fallback_schedule();
        let monday = result.schedule.get("Monday - August 12").unwrap();

        assert_eq!(monday.len(), 3);
        assert_eq!(monday[0].time, "9:00 AM");
        assert_eq!(monday[0].activity, "Registration & Welcome");
        assert_eq!(monday[0].location, Some("Main Entrance".to_string()));
        assert_eq!(monday[0].instructor, Some("Team LOZ".to_string()));
        // Quoted description keeps its commas
        assert!(monday[0].description.contains("get your gear"));
    }

    #[test]
    fn test_fallback_missing_fields_stay_absent() {
        let result = fallback_schedule();
        let tuesday = result.schedule.get("Tuesday - August 13").unwrap();

        assert_eq!(tuesday.len(), 2);
        assert_eq!(tuesday[1].activity, "Stopping Methods Workshop");
        assert_eq!(tuesday[1].location, None);
        assert_eq!(tuesday[1].instructor, None);
    }
}
