//! Core library for the `meteo` forecast widget.
//!
//! This crate defines:
//! - Shared domain models (places, search results, raw forecast data)
//! - The application state machine (search debounce, place selection,
//!   forecast fetching, stale-response handling)
//! - Display projections (today's hourly strip, the daily list) and
//!   temperature/weather-code formatting helpers
//! - Abstraction over the Open-Meteo HTTP collaborators and the
//!   geolocation capability
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or
//! services.

pub mod app;
pub mod codes;
pub mod debounce;
pub mod model;
pub mod provider;
pub mod units;
pub mod view;

pub use app::{App, AppState, Command, DEFAULT_QUERY};
pub use codes::{WeatherInfo, lookup};
pub use debounce::{DEFAULT_QUIET_PERIOD, Debouncer};
pub use model::{Coordinates, ForecastData, Place, SearchResult};
pub use provider::{GeolocateError, Geolocator, ProviderError, WeatherProvider};
pub use units::{Unit, celsius_to_fahrenheit, fahrenheit_to_celsius, format_temp};
pub use view::{DAYS_SHOWN, DayEntry, HourlyEntry, derive_days, derive_hourly_today};
