//! Pure projections from the raw forecast response to display-ready shapes.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::ForecastData;

/// How many daily entries the presentation layer shows.
pub const DAYS_SHOWN: usize = 7;

/// One hourly slot falling on the current calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temp: f64,
    pub pop: Option<i32>,
    pub code: Option<i32>,
}

/// One daily slot, unfiltered (truncation to [`DAYS_SHOWN`] happens at render).
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub code: i32,
    pub tmax: f64,
    pub tmin: f64,
    pub pop: Option<i32>,
}

/// Entries of the hourly series whose local calendar date equals `today`,
/// in input order. Empty when there is no forecast yet.
pub fn derive_hourly_today(forecast: Option<&ForecastData>, today: NaiveDate) -> Vec<HourlyEntry> {
    let Some(forecast) = forecast else {
        return Vec::new();
    };
    let hourly = &forecast.hourly;

    let mut out = Vec::new();
    for (i, raw) in hourly.time.iter().enumerate() {
        let Ok(time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") else {
            continue;
        };
        if time.date() != today {
            continue;
        }
        let Some(&temp) = hourly.temperature_2m.get(i) else {
            continue;
        };
        out.push(HourlyEntry {
            time,
            temp,
            pop: series_at(hourly.precipitation_probability.as_deref(), i),
            code: series_at(hourly.weathercode.as_deref(), i),
        });
    }
    out
}

/// Every index of the daily series as a [`DayEntry`], in input order.
pub fn derive_days(forecast: Option<&ForecastData>) -> Vec<DayEntry> {
    let Some(forecast) = forecast else {
        return Vec::new();
    };
    let daily = &forecast.daily;

    let mut out = Vec::new();
    for (i, raw) in daily.time.iter().enumerate() {
        let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
            continue;
        };
        let (Some(&code), Some(&tmax), Some(&tmin)) = (
            daily.weathercode.get(i),
            daily.temperature_2m_max.get(i),
            daily.temperature_2m_min.get(i),
        ) else {
            continue;
        };
        out.push(DayEntry {
            date,
            code,
            tmax,
            tmin,
            pop: series_at(daily.precipitation_probability_max.as_deref(), i),
        });
    }
    out
}

fn series_at<T: Copy>(series: Option<&[T]>, index: usize) -> Option<T> {
    series.and_then(|s| s.get(index)).copied()
}
