//! Google Directions HTTP client.
//!
//! Provides async travel-time lookups between two coordinates for the
//! walking and driving modes.

use std::fmt;

use crate::domain::Coord;

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How the traveller moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Walking,
    Driving,
}

impl TravelMode {
    /// The API's name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the directions client.
#[derive(Clone)]
pub struct DirectionsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Endpoint URL (defaults to the public Google endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// Keep the key out of logs.
impl fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Directions API client.
#[derive(Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        if config.api_key.trim().is_empty() {
            return Err(DirectionsError::MissingKey);
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Travel time from `from` to `to`, in whole minutes.
    ///
    /// Uses the first leg of the first suggested route.
    pub async fn duration_minutes(
        &self,
        from: Coord,
        to: Coord,
        mode: TravelMode,
    ) -> Result<u32, DirectionsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", from.to_string()),
                ("destination", to.to_string()),
                ("mode", mode.as_str().to_string()),
                ("departure_time", "now".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_duration_minutes(&body)
    }
}

impl fmt::Debug for DirectionsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Extract whole minutes from a Directions response body.
pub fn parse_duration_minutes(body: &str) -> Result<u32, DirectionsError> {
    let parsed: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
        })?;

    if !parsed.is_ok() {
        return Err(DirectionsError::Status {
            status: parsed.status,
            message: parsed.error_message,
        });
    }

    let seconds = parsed.first_leg_seconds().ok_or(DirectionsError::NoRoute)?;
    Ok(seconds_to_minutes(seconds))
}

fn seconds_to_minutes(seconds: u64) -> u32 {
    (seconds as f64 / 60.0).round_ties_even() as u32
}
