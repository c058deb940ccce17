use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Local;
use clap::Parser;

use meteo_core::provider::openmeteo::OpenMeteoProvider;
use meteo_core::{
    App, AppState, Command, Coordinates, DAYS_SHOWN, DEFAULT_QUERY, DEFAULT_QUIET_PERIOD,
    GeolocateError, Geolocator, WeatherProvider, codes, derive_days, derive_hourly_today,
    format_temp,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Open-Meteo forecast lookup")]
pub struct Cli {
    /// City name to search for. Prompts interactively when omitted.
    pub query: Option<String>,

    /// Show temperatures in Fahrenheit instead of Celsius.
    #[arg(long, short = 'f')]
    pub fahrenheit: bool,

    /// Highlight this entry of the daily list (0 = today).
    #[arg(long, default_value_t = 0)]
    pub day: usize,

    /// Take the first search result without prompting.
    #[arg(long)]
    pub first: bool,

    /// Use the device position instead of searching by name.
    #[arg(long)]
    pub locate: bool,

    /// Device latitude for --locate, supplied by the host environment.
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Device longitude for --locate, supplied by the host environment.
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let provider = OpenMeteoProvider::new().context("Failed to build the HTTP client")?;
        let mut app = App::new();

        if self.fahrenheit {
            app.toggle_unit();
        }
        app.select_day(self.day);

        if self.locate {
            let locator = HostPosition {
                coords: self
                    .lat
                    .zip(self.lon)
                    .map(|(latitude, longitude)| Coordinates { latitude, longitude }),
            };
            match app.use_my_location(&locator).await {
                Ok(Some(cmd)) => drive(&mut app, &provider, cmd).await,
                Ok(None) => {}
                Err(err) => {
                    // Geolocation failures are surfaced immediately; state is untouched.
                    eprintln!("{err}");
                    return Ok(());
                }
            }
        } else {
            let query = match self.query {
                Some(q) => q,
                None => inquire::Text::new("Search city:")
                    .with_default(DEFAULT_QUERY)
                    .prompt()
                    .context("Failed to read a search query")?,
            };

            app.set_query(Instant::now(), &query);
            tokio::time::sleep(DEFAULT_QUIET_PERIOD).await;
            let Some(cmd) = app.tick(Instant::now()) else {
                println!("Nothing to search for.");
                return Ok(());
            };
            drive(&mut app, &provider, cmd).await;

            if app.state().candidates.is_empty() {
                println!("No places matched \"{query}\".");
                return Ok(());
            }

            if !self.first && app.state().candidates.len() > 1 {
                let options: Vec<String> =
                    app.state().candidates.iter().map(|c| c.describe()).collect();
                // raw_prompt keeps the index: identically labelled places
                // (same name/region, different coordinates) stay distinct
                let picked = inquire::Select::new("Which place?", options)
                    .raw_prompt()
                    .context("Failed to pick a place")?;
                if let Some(cmd) = app.select_candidate(picked.index) {
                    drive(&mut app, &provider, cmd).await;
                }
            }
        }

        render(app.state());
        Ok(())
    }
}

/// The host environment hands the device position in via --lat/--lon;
/// without them the capability is missing.
#[derive(Debug)]
struct HostPosition {
    coords: Option<Coordinates>,
}

#[async_trait]
impl Geolocator for HostPosition {
    async fn current_position(&self) -> Result<Coordinates, GeolocateError> {
        self.coords.ok_or(GeolocateError::Unsupported)
    }
}

/// Execute commands until the app has nothing more to request.
async fn drive(app: &mut App, provider: &dyn WeatherProvider, mut cmd: Command) {
    loop {
        let next = match cmd {
            Command::Search { generation, query } => {
                let result = provider.search(&query).await;
                app.on_search_response(generation, result)
            }
            Command::FetchForecast {
                generation,
                latitude,
                longitude,
            } => {
                let result = provider.forecast(latitude, longitude).await;
                app.on_forecast_response(generation, result);
                None
            }
        };
        match next {
            Some(c) => cmd = c,
            None => return,
        }
    }
}

fn render(state: &AppState) {
    match &state.place {
        Some(place) if place.country.is_empty() => println!("{}", place.name),
        Some(place) => println!("{}, {}", place.name, place.country),
        None => {
            println!("Choose a place");
            return;
        }
    }

    // Error display takes precedence over any previously fetched forecast.
    if let Some(error) = &state.error {
        println!("Error: {error}");
        return;
    }
    let Some(forecast) = &state.forecast else {
        println!("No forecast available.");
        return;
    };

    let unit = state.unit;
    let current = codes::lookup(forecast.current_weather.weathercode);
    println!(
        "\n{}  {}{}  {}",
        current.icon,
        format_temp(forecast.current_weather.temperature, unit),
        unit.symbol(),
        current.label
    );

    let days = derive_days(state.forecast.as_ref());
    if let Some(today) = days.first() {
        println!(
            "Precipitation: {}% · Max: {}{} · Min: {}{}",
            today.pop.unwrap_or(0),
            format_temp(today.tmax, unit),
            unit.symbol(),
            format_temp(today.tmin, unit),
            unit.symbol(),
        );
    }

    let today = Local::now().date_naive();
    let hourly = derive_hourly_today(state.forecast.as_ref(), today);
    if !hourly.is_empty() {
        println!("\nToday ({})", today.format("%A, %b %-d"));
        for entry in &hourly {
            let info = entry.code.map_or(codes::UNKNOWN, codes::lookup);
            println!(
                "  {}  {:>4}{}  {}  {}% rain",
                entry.time.format("%H:%M"),
                format_temp(entry.temp, unit),
                unit.symbol(),
                info.icon,
                entry.pop.unwrap_or(0),
            );
        }
    }

    if !days.is_empty() {
        println!("\nNext {DAYS_SHOWN} Days");
        for (i, day) in days.iter().take(DAYS_SHOWN).enumerate() {
            let info = codes::lookup(day.code);
            let marker = if i == state.selected_day { '>' } else { ' ' };
            println!(
                "{marker} {}  {}  {:<22} {:>4}{} / {:>4}{}  {}% rain",
                day.date.format("%a %b %d"),
                info.icon,
                info.label,
                format_temp(day.tmax, unit),
                unit.symbol(),
                format_temp(day.tmin, unit),
                unit.symbol(),
                day.pop.unwrap_or(0),
            );
        }
    }

    println!("\nPowered by Open-Meteo");
}
