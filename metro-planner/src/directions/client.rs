//! Directions HTTP client.
//!
//! Resolves point-to-point travel estimates against a Google Directions
//! compatible endpoint. A semaphore bounds in-flight requests.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::trace;

use crate::domain::{LatLng, TravelMode};

use super::TravelEstimator;
use super::convert::{TravelEstimate, convert_response};
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the Maps APIs.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Google Maps)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Query parameters for a request.
    ///
    /// Driving requests ask for a traffic-aware estimate departing now.
    fn query(&self, origin: LatLng, destination: LatLng, mode: TravelMode) -> Vec<(&str, String)> {
        let mut params = vec![
            ("origin", origin.to_query()),
            ("destination", destination.to_query()),
            ("mode", mode.as_str().to_string()),
        ];
        if mode == TravelMode::Driving {
            params.push(("departure_time", "now".to_string()));
            params.push(("traffic_model", "best_guess".to_string()));
        }
        params.push(("key", self.api_key.clone()));
        params
    }

    /// Fetch a single point-to-point estimate.
    pub async fn get_estimate(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: TravelMode,
    ) -> Result<TravelEstimate, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/directions/json", self.base_url);

        trace!(%origin, %destination, %mode, "Requesting directions");

        let response = self
            .http
            .get(&url)
            .query(&self.query(origin, destination, mode))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        convert_response(&parsed, mode)
    }
}

impl TravelEstimator for DirectionsClient {
    async fn estimate(
        &self,
        origin: LatLng,
        destination: LatLng,
        mode: TravelMode,
    ) -> Result<TravelEstimate, DirectionsError> {
        self.get_estimate(origin, destination, mode).await
    }
}
