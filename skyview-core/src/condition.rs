use serde::{Deserialize, Serialize};

/// Weather category derived from an Open-Meteo (WMO) weather code.
/// See: https://open-meteo.com/en/docs#weathervariables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Snowfall,
    RainShowers,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51..=67 => Self::Drizzle,
            71..=77 => Self::Snowfall,
            80..=82 => Self::RainShowers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Snowfall => "Snowfall",
            Self::RainShowers => "Rain showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Glyph for text front ends.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::PartlyCloudy | Self::Unknown => "⛅",
            Self::Overcast => "☁️",
            Self::Fog => "🌫️",
            Self::Drizzle => "🌦️",
            Self::Snowfall => "❄️",
            Self::RainShowers => "🌧️",
            Self::Thunderstorm => "⛈️",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Human-readable category for a weather code; unlisted codes are "Unknown".
pub fn describe(code: i32) -> &'static str {
    WeatherCondition::from_code(code).description()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_reference_codes() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(61), "Drizzle");
        assert_eq!(describe(96), "Thunderstorm");
        assert_eq!(describe(17), "Unknown");
    }

    #[test]
    fn cloud_codes() {
        assert_eq!(WeatherCondition::from_code(1), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_code(2), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_code(3), WeatherCondition::Overcast);
    }

    #[test]
    fn fog_codes() {
        assert_eq!(WeatherCondition::from_code(45), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_code(48), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_code(46), WeatherCondition::Unknown);
    }

    #[test]
    fn range_edges() {
        assert_eq!(WeatherCondition::from_code(51), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_code(67), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_code(68), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_code(71), WeatherCondition::Snowfall);
        assert_eq!(WeatherCondition::from_code(77), WeatherCondition::Snowfall);
        assert_eq!(WeatherCondition::from_code(80), WeatherCondition::RainShowers);
        assert_eq!(WeatherCondition::from_code(82), WeatherCondition::RainShowers);
        assert_eq!(WeatherCondition::from_code(85), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_code(95), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_code(99), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn negative_and_large_codes_are_unknown() {
        assert_eq!(describe(-1), "Unknown");
        assert_eq!(describe(1000), "Unknown");
    }

    #[test]
    fn emoji_per_category() {
        assert_eq!(WeatherCondition::ClearSky.emoji(), "☀️");
        assert_eq!(WeatherCondition::Thunderstorm.emoji(), "⛈️");
    }
}
