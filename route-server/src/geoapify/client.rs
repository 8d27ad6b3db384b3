//! Geoapify HTTP client.
//!
//! Async methods for the geocoding and routing endpoints. Handles
//! authentication, bounded concurrency, and conversion to domain types.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Coordinate, Route};

use super::error::GeoapifyError;
use super::types::{
    GeocodeResponse, GeocodedPlace, RoutingResponse, convert_geocode, convert_route,
};

/// Default base URL for the Geoapify API.
const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Geoapify client.
///
/// The API key is explicit configuration here rather than ambient process
/// state; `main` is the only place that reads it from the environment.
#[derive(Debug, Clone)]
pub struct GeoapifyConfig {
    /// API key, sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Geoapify)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeoapifyConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
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

/// Geoapify API client.
///
/// Provides geocoding and truck routing. Uses a semaphore to limit
/// concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct GeoapifyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl GeoapifyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeoapifyConfig) -> Result<Self, GeoapifyError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Resolve a free-text place name into a coordinate.
    ///
    /// Takes the first (best-ranked) feature of the geocoding response;
    /// an empty feature list is `NoResults`.
    pub async fn geocode(&self, text: &str) -> Result<GeocodedPlace, GeoapifyError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GeoapifyError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/v1/geocode/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("text", text), ("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let body = check_status(response).await?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeoapifyError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        convert_geocode(text, parsed)
    }

    /// Fetch a truck-profile route between two coordinates.
    ///
    /// Requests imperial units; the returned [`Route`] is in miles either
    /// way, with the polyline in travel order.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, GeoapifyError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GeoapifyError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/v1/routing", self.base_url);
        let waypoints = format!("{origin}|{destination}");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("waypoints", waypoints.as_str()),
                ("mode", "truck"),
                ("units", "imperial"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let body = check_status(response).await?;

        let parsed: RoutingResponse =
            serde_json::from_str(&body).map_err(|e| GeoapifyError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let feature = parsed
            .features
            .into_iter()
            .next()
            .ok_or_else(|| GeoapifyError::NoResults {
                query: waypoints.clone(),
            })?;

        convert_route(feature)
    }
}

/// Map error statuses to typed errors and return the body text on success.
async fn check_status(response: reqwest::Response) -> Result<String, GeoapifyError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(GeoapifyError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeoapifyError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GeoapifyError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}
