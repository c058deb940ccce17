use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{ForecastData, SearchResult};

use super::{ProviderError, WeatherProvider};

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const SEARCH_COUNT: &str = "5";
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,weathercode";
const DAILY_FIELDS: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Open-Meteo client. No API key; both endpoints are public.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http })
    }
}

/// Geocoding envelope; `results` is absent when nothing matches.
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let endpoint = "geocoding";

        let res = self
            .http
            .get(GEOCODING_URL)
            .query(&[
                ("name", query),
                ("count", SEARCH_COUNT),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: GeocodingResponse = serde_json::from_str(&body)
            .map_err(|source| ProviderError::Parse { endpoint, source })?;

        Ok(parsed.results.unwrap_or_default())
    }

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastData, ProviderError> {
        let endpoint = "forecast";

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Transport { endpoint, source })?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ProviderError::Parse { endpoint, source })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // back off to a char boundary so multibyte bodies don't split mid-char
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_response_parses_results() {
        let body = r#"{
            "results": [
                {
                    "name": "New Delhi",
                    "country": "India",
                    "country_code": "IN",
                    "admin1": "Delhi",
                    "latitude": 28.61141,
                    "longitude": 77.21688,
                    "timezone": "Asia/Kolkata"
                }
            ],
            "generationtime_ms": 0.7
        }"#;
        let parsed: GeocodingResponse = serde_json::from_str(body).expect("valid payload");
        let results = parsed.results.expect("results present");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "New Delhi");
        assert_eq!(results[0].country_code.as_deref(), Some("IN"));
    }

    #[test]
    fn geocoding_response_without_results_is_empty() {
        let parsed: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.2}"#).expect("valid payload");
        assert!(parsed.results.unwrap_or_default().is_empty());
    }

    #[test]
    fn forecast_response_parses_all_blocks() {
        let body = r#"{
            "latitude": 28.6,
            "longitude": 77.2,
            "timezone": "Asia/Kolkata",
            "current_weather": {"temperature": 31.2, "weathercode": 1, "windspeed": 6.1},
            "hourly": {
                "time": ["2026-08-23T00:00", "2026-08-23T01:00"],
                "temperature_2m": [27.1, 26.8],
                "precipitation_probability": [5, 10],
                "weathercode": [1, 2]
            },
            "daily": {
                "time": ["2026-08-23"],
                "weathercode": [1],
                "temperature_2m_max": [33.0],
                "temperature_2m_min": [26.0],
                "precipitation_probability_max": [15]
            }
        }"#;
        let parsed: ForecastData = serde_json::from_str(body).expect("valid payload");
        assert_eq!(parsed.current_weather.temperature, 31.2);
        assert_eq!(parsed.hourly.time.len(), 2);
        assert_eq!(parsed.daily.weathercode, vec![1]);
    }

    #[test]
    fn truncate_body_caps_long_payloads() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < 250);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 67 three-byte suns = 201 bytes, with byte 200 inside a char
        let sunny = "\u{2600}".repeat(67);
        let truncated = truncate_body(&sunny);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.trim_end_matches("..."), "\u{2600}".repeat(66));

        // exactly at the cap stays untouched
        let at_cap = "x".repeat(200);
        assert_eq!(truncate_body(&at_cap), at_cap);
    }
}
