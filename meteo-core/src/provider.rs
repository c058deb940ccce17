use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{Coordinates, ForecastData, SearchResult};

pub mod openmeteo;

/// Failure of a geocoding or forecast request.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to send {endpoint} request: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Geocoding search plus forecast retrieval behind one seam, so the
/// orchestrator can be driven by a test double.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up candidate places for a free-text query, at most 5 results.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;

    /// Fetch current/hourly/daily forecast data for a coordinate pair.
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastData, ProviderError>;
}

/// Failure of the geolocation collaborator. Surfaced directly to the user;
/// never stored in application state.
#[derive(Debug, thiserror::Error)]
pub enum GeolocateError {
    #[error("Geolocation not supported")]
    Unsupported,

    #[error("{0}")]
    Unavailable(String),
}

/// Environment-provided device positioning, e.g. a browser geolocation API
/// or a stub that reports [`GeolocateError::Unsupported`].
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocateError>;
}
