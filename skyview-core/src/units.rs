use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh * 0.621371
}

/// Display unit chosen by the user. Provider data is always metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Metric, UnitSystem::Imperial]
    }

    pub fn temperature(&self, celsius: f64) -> f64 {
        match self {
            UnitSystem::Metric => celsius,
            UnitSystem::Imperial => celsius_to_fahrenheit(celsius),
        }
    }

    pub fn wind_speed(&self, kmh: f64) -> f64 {
        match self {
            UnitSystem::Metric => kmh,
            UnitSystem::Imperial => kmh_to_mph(kmh),
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "metric" | "celsius" | "c" => Ok(UnitSystem::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(UnitSystem::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric (celsius), imperial (fahrenheit)."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_reference_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn kmh_to_mph_factor() {
        assert!((kmh_to_mph(10.0) - 6.21371).abs() < 1e-9);
        assert_eq!(kmh_to_mph(0.0), 0.0);
    }

    #[test]
    fn metric_is_identity() {
        assert_eq!(UnitSystem::Metric.temperature(21.5), 21.5);
        assert_eq!(UnitSystem::Metric.wind_speed(12.0), 12.0);
        assert_eq!(UnitSystem::Metric.temperature_suffix(), "°C");
    }

    #[test]
    fn imperial_converts() {
        assert_eq!(UnitSystem::Imperial.temperature(100.0), 212.0);
        assert!((UnitSystem::Imperial.wind_speed(10.0) - 6.21371).abs() < 1e-9);
        assert_eq!(UnitSystem::Imperial.wind_speed_suffix(), "mph");
    }

    #[test]
    fn unit_system_as_str_roundtrip() {
        for units in UnitSystem::all() {
            let parsed: UnitSystem = units.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*units, parsed);
        }
    }

    #[test]
    fn unit_system_aliases() {
        assert_eq!("Fahrenheit".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!(" c ".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);

        let err = "kelvin".parse::<UnitSystem>().unwrap_err();
        assert!(err.to_string().contains("Unknown unit system"));
    }
}
