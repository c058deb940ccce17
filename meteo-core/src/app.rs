//! Application state and the orchestration rules around it.
//!
//! [`App`] is a synchronous state machine: user intents and network
//! completions go in, [`Command`]s come out for an async driver to execute.
//! Stale completions are detected with generation tokens, so a slow response
//! from a superseded request can never overwrite newer state.

use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::model::{ForecastData, Place, SearchResult};
use crate::provider::{GeolocateError, Geolocator, ProviderError};
use crate::units::Unit;

/// Query the widget starts out with.
pub const DEFAULT_QUERY: &str = "New Delhi";

/// The full observable state, owned exclusively by [`App`] and mutated only
/// through its methods.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub query: String,
    pub unit: Unit,
    pub candidates: Vec<SearchResult>,
    pub place: Option<Place>,
    pub forecast: Option<ForecastData>,
    pub selected_day: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            unit: Unit::Celsius,
            candidates: Vec::new(),
            place: None,
            forecast: None,
            selected_day: 0,
            loading: false,
            error: None,
        }
    }
}

/// A network request the driver must issue. The captured generation must be
/// passed back with the completion so stale responses can be dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search {
        generation: u64,
        query: String,
    },
    FetchForecast {
        generation: u64,
        latitude: f64,
        longitude: f64,
    },
}

#[derive(Debug)]
pub struct App {
    state: AppState,
    debouncer: Debouncer<String>,
    search_generation: u64,
    fetch_generation: u64,
    // coordinate key of the last issued fetch; refetch only when it changes
    fetched_key: Option<(f64, f64)>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            debouncer: Debouncer::default(),
            search_generation: 0,
            fetch_generation: 0,
            fetched_key: None,
        }
    }

    pub fn with_quiet_period(quiet: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(quiet),
            ..Self::new()
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Record a keystroke: updates the visible query and restarts the
    /// debounce timer.
    pub fn set_query(&mut self, now: Instant, text: &str) {
        self.state.query = text.to_string();
        self.debouncer.update(now, text.to_string());
    }

    /// Advance the debounce clock. When a non-empty query settles, a new
    /// search is issued; settling on an empty query does nothing.
    pub fn tick(&mut self, now: Instant) -> Option<Command> {
        let query = self.debouncer.poll(now)?;
        if query.is_empty() {
            return None;
        }
        self.search_generation += 1;
        Some(Command::Search {
            generation: self.search_generation,
            query,
        })
    }

    /// Apply a search completion. Responses from superseded requests are
    /// dropped. Failures are logged only; the candidate list is untouched
    /// and nothing is surfaced to the user.
    pub fn on_search_response(
        &mut self,
        generation: u64,
        result: Result<Vec<SearchResult>, ProviderError>,
    ) -> Option<Command> {
        if generation != self.search_generation {
            tracing::debug!(generation, current = self.search_generation, "dropping stale search response");
            return None;
        }
        match result {
            Ok(results) => {
                self.state.candidates = results;
                // Auto-select fires only while no place is selected yet;
                // it never overrides an existing selection.
                if self.state.place.is_none() {
                    if let Some(first) = self.state.candidates.first() {
                        let place = Place::from(first);
                        return self.select_place(place);
                    }
                }
                None
            }
            Err(err) => {
                tracing::warn!("place search failed: {err}");
                None
            }
        }
    }

    /// User picked a candidate from the list. Rewrites the visible query to
    /// "Name, CC" the way the original widget does (without re-feeding the
    /// debouncer) and selects the place.
    pub fn select_candidate(&mut self, index: usize) -> Option<Command> {
        let candidate = self.state.candidates.get(index)?;
        let suffix = candidate
            .country_code
            .clone()
            .or_else(|| candidate.country.clone());
        self.state.query = match suffix {
            Some(s) if !s.is_empty() => format!("{}, {}", candidate.name, s),
            _ => candidate.name.clone(),
        };
        let place = Place::from(candidate);
        self.select_place(place)
    }

    /// Make `place` the active place. A forecast fetch is issued only when
    /// the coordinate pair actually changed, compared by value.
    pub fn select_place(&mut self, place: Place) -> Option<Command> {
        let key = place.coord_key();
        self.state.place = Some(place);
        if self.fetched_key == Some(key) {
            return None;
        }
        self.fetched_key = Some(key);
        self.fetch_generation += 1;
        self.state.loading = true;
        self.state.error = None;
        Some(Command::FetchForecast {
            generation: self.fetch_generation,
            latitude: key.0,
            longitude: key.1,
        })
    }

    /// Apply a forecast completion. On failure the error text is surfaced
    /// and the previous forecast (if any) is kept.
    pub fn on_forecast_response(
        &mut self,
        generation: u64,
        result: Result<ForecastData, ProviderError>,
    ) {
        if generation != self.fetch_generation {
            tracing::debug!(generation, current = self.fetch_generation, "dropping stale forecast response");
            return;
        }
        match result {
            Ok(forecast) => {
                self.state.forecast = Some(forecast);
                self.state.loading = false;
            }
            Err(err) => {
                self.state.error = Some(err.to_string());
                self.state.loading = false;
            }
        }
    }

    pub fn toggle_unit(&mut self) {
        self.state.unit = self.state.unit.toggled();
    }

    pub fn select_day(&mut self, index: usize) {
        self.state.selected_day = index;
    }

    /// Ask the geolocation collaborator for the device position and select
    /// it as "My Location". On failure nothing changes; the error is
    /// returned for the presentation layer to surface.
    pub async fn use_my_location(
        &mut self,
        locator: &dyn Geolocator,
    ) -> Result<Option<Command>, GeolocateError> {
        let coords = locator.current_position().await?;
        Ok(self.select_place(Place::my_location(coords)))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
