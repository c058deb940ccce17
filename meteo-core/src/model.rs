use serde::{Deserialize, Serialize};

/// Device coordinates as reported by a geolocation collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named geographic point the user has selected for forecasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    /// Place used when the position comes from the geolocation collaborator.
    pub fn my_location(coords: Coordinates) -> Self {
        Self {
            name: "My Location".to_string(),
            country: String::new(),
            lat: coords.latitude,
            lon: coords.longitude,
        }
    }

    /// Identity key for refetch decisions: compare coordinates by value,
    /// never `Place` instances by reference.
    pub fn coord_key(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

impl From<&SearchResult> for Place {
    fn from(result: &SearchResult) -> Self {
        Self {
            name: result.name.clone(),
            country: result.country.clone().unwrap_or_default(),
            lat: result.latitude,
            lon: result.longitude,
        }
    }
}

/// Raw geocoding candidate. Held only in the candidate list and discarded
/// once a selection is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl SearchResult {
    /// Display string for a candidate picker: "Name, Region, Country".
    pub fn describe(&self) -> String {
        let mut out = self.name.clone();
        if let Some(admin1) = self.admin1.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(", ");
            out.push_str(admin1);
        }
        if let Some(country) = self.country.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(", ");
            out.push_str(country);
        }
        out
    }
}

/// Raw forecast response, kept in the shape Open-Meteo returns it:
/// parallel index-aligned series, chronologically ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    pub current_weather: CurrentWeather,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i32,
}

/// Hourly series. Timestamps are local wall-clock ISO strings
/// ("2026-08-23T14:00") because the request uses `timezone=auto`.
/// Optional series may be absent or shorter than `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub precipitation_probability: Option<Vec<i32>>,
    #[serde(default)]
    pub weathercode: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weathercode: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<i32>>,
}
