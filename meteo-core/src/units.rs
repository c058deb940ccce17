//! Temperature unit selection and display formatting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn toggled(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Round a Celsius value to a whole number in the requested unit.
/// Uses `f64::round` (half away from zero).
pub fn format_temp(celsius: f64, unit: Unit) -> i64 {
    let value = match unit {
        Unit::Celsius => celsius,
        Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
    };
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(format_temp(0.5, Unit::Celsius), 1);
        assert_eq!(format_temp(-0.5, Unit::Celsius), -1);
        assert_eq!(format_temp(31.2, Unit::Celsius), 31);
        assert_eq!(format_temp(31.2, Unit::Fahrenheit), 88);
    }

    #[test]
    fn display_round_trip_stays_within_one_degree() {
        for &c in &[-40.0, -17.8, 0.0, 0.4, 15.5, 31.2, 37.0, 100.0] {
            let shown_f = format_temp(c, Unit::Fahrenheit);
            let back_c = fahrenheit_to_celsius(shown_f as f64);
            let shown_c = format_temp(back_c, Unit::Celsius);
            assert!(
                (shown_c as f64 - c).abs() <= 1.0,
                "{c}°C -> {shown_f}°F -> {shown_c}°C drifted too far"
            );
        }
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Unit::Celsius.toggled(), Unit::Fahrenheit);
        assert_eq!(Unit::Fahrenheit.toggled(), Unit::Celsius);
    }
}
