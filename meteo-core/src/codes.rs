//! Static lookup from WMO weather codes to a display label and icon.

/// Label/icon pair for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Fallback for unmapped codes (and for entries where the code is missing).
pub const UNKNOWN: WeatherInfo = WeatherInfo {
    label: "Unknown",
    icon: "🌡️",
};

/// Total over all codes: anything unmapped falls back to "Unknown".
pub fn lookup(code: i32) -> WeatherInfo {
    let (label, icon) = match code {
        0 => ("Clear", "☀️"),
        1 => ("Mainly Clear", "🌤️"),
        2 => ("Partly Cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 => ("Fog", "🌫️"),
        48 => ("Rime Fog", "🌫️"),
        51 => ("Drizzle Light", "🌦️"),
        53 => ("Drizzle", "🌦️"),
        55 => ("Drizzle Heavy", "🌧️"),
        56 => ("Freezing Drizzle Light", "🌧️❄️"),
        57 => ("Freezing Drizzle Heavy", "🌧️❄️"),
        61 => ("Rain Light", "🌧️"),
        63 => ("Rain", "🌧️"),
        65 => ("Rain Heavy", "🌧️"),
        66 => ("Freezing Rain Light", "🌧️❄️"),
        67 => ("Freezing Rain Heavy", "🌧️❄️"),
        71 => ("Snow Light", "🌨️"),
        73 => ("Snow", "🌨️"),
        75 => ("Snow Heavy", "❄️"),
        77 => ("Snow Grains", "❄️"),
        80 => ("Showers Light", "🌦️"),
        81 => ("Showers", "🌦️"),
        82 => ("Showers Heavy", "⛈️"),
        85 => ("Snow Showers Light", "🌨️"),
        86 => ("Snow Showers Heavy", "❄️"),
        95 => ("Thunderstorm", "⛈️"),
        96 => ("Thunderstorm Hail", "⛈️🧊"),
        99 => ("Thunderstorm Severe", "⛈️🧊"),
        _ => return UNKNOWN,
    };
    WeatherInfo { label, icon }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(lookup(0).label, "Clear");
        assert_eq!(lookup(1).label, "Mainly Clear");
        assert_eq!(lookup(95).label, "Thunderstorm");
    }

    #[test]
    fn unmapped_code_falls_back_to_unknown() {
        assert_eq!(lookup(9999), UNKNOWN);
        assert_eq!(lookup(-1).label, "Unknown");
        // 4..=44 is a gap in the WMO table
        assert_eq!(lookup(4).label, "Unknown");
    }
}
