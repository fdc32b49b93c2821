use chrono::NaiveDateTime;
use skyview_core::{LookupError, LookupResult, SearchHistoryEntry, UnitSystem};

const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Text block for one lookup result in the chosen units.
pub fn result_lines(result: &LookupResult, units: UnitSystem) -> Vec<String> {
    let snap = &result.snapshot;
    let temp_unit = units.temperature_suffix();

    let mut lines = vec![
        format!("City: {}", result.location.name()),
        format!("Time: {}", snap.local_time),
        format!("Temperature: {:.1} {}", units.temperature(snap.temperature_c), temp_unit),
        format!("Humidity: {:.1} %", snap.relative_humidity_pct),
        format!("Precipitation: {:.1} mm", snap.precipitation_mm),
        format!(
            "Wind Speed: {:.1} {}",
            units.wind_speed(snap.wind_speed_kmh),
            units.wind_speed_suffix()
        ),
        format!("Condition: {} {}", result.condition, result.condition.emoji()),
        format!(
            "Theme: {} ({})",
            result.time_of_day,
            result.time_of_day.background_asset()
        ),
    ];

    if result.forecast.is_empty() {
        lines.push("Next hours: no forecast available".to_string());
    } else {
        lines.push("Next hours:".to_string());
        for entry in &result.forecast {
            lines.push(format!(
                "  {} → {:.1} {}",
                short_time(&entry.local_time),
                units.temperature(entry.temperature_c),
                temp_unit
            ));
        }
    }

    lines
}

pub fn history_lines(entries: &[SearchHistoryEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No searches yet.".to_string()];
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>3}. {}", i + 1, entry.label()))
        .collect()
}

pub fn error_line(err: &LookupError) -> String {
    format!("{}: {}", err.kind(), err)
}

/// `HH:MM` for a provider timestamp; unparsable values are shown as-is.
fn short_time(local_time: &str) -> String {
    NaiveDateTime::parse_from_str(local_time, LOCAL_TIME_FORMAT)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| local_time.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LookupResult {
        serde_json::from_value(serde_json::json!({
            "sequence": 1,
            "location": { "name": "Bangkok", "latitude": 13.75, "longitude": 100.5 },
            "snapshot": {
                "local_time": "2025-06-05T18:00",
                "temperature_c": 30.0,
                "relative_humidity_pct": 70.0,
                "precipitation_mm": 0.4,
                "wind_speed_kmh": 10.0,
                "condition_code": 95
            },
            "forecast": [
                { "local_time": "2025-06-05T19:00", "temperature_c": 29.0 },
                { "local_time": "2025-06-05T20:00", "temperature_c": 28.0 }
            ],
            "condition": "thunderstorm",
            "time_of_day": "sunset"
        }))
        .expect("valid lookup result")
    }

    #[test]
    fn metric_output() {
        let lines = result_lines(&sample(), UnitSystem::Metric);

        assert_eq!(lines[0], "City: Bangkok");
        assert_eq!(lines[2], "Temperature: 30.0 °C");
        assert_eq!(lines[5], "Wind Speed: 10.0 km/h");
        assert_eq!(lines[6], "Condition: Thunderstorm ⛈️");
        assert_eq!(lines[7], "Theme: sunset (sunset.jpg)");
        assert_eq!(lines[9], "  19:00 → 29.0 °C");
    }

    #[test]
    fn imperial_output() {
        let lines = result_lines(&sample(), UnitSystem::Imperial);

        assert_eq!(lines[2], "Temperature: 86.0 °F");
        assert_eq!(lines[5], "Wind Speed: 6.2 mph");
        assert_eq!(lines[10], "  20:00 → 82.4 °F");
    }

    #[test]
    fn short_time_falls_back_to_raw() {
        assert_eq!(short_time("2025-06-05T07:00"), "07:00");
        assert_eq!(short_time("soon"), "soon");
    }

    #[test]
    fn history_listing() {
        assert_eq!(history_lines(&[]), ["No searches yet."]);

        let entries = vec![SearchHistoryEntry {
            city_name: "Tokyo".into(),
            local_time: "2025-06-05T18:00".into(),
        }];
        assert_eq!(history_lines(&entries), ["  1. Tokyo – 2025-06-05T18:00"]);
    }

    #[test]
    fn error_line_includes_kind() {
        let line = error_line(&LookupError::EmptyPlaceName);
        assert_eq!(line, "Input Error: Please enter a place name.");
    }
}
