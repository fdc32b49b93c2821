//! State a front end threads between renders.

use crate::{model::LookupResult, units::UnitSystem};

#[derive(Debug, Clone, Default)]
pub struct PresentationState {
    current: Option<LookupResult>,
    units: UnitSystem,
    latest_sequence: u64,
}

impl PresentationState {
    pub fn new(units: UnitSystem) -> Self {
        Self { current: None, units, latest_sequence: 0 }
    }

    /// Show `result` unless a newer lookup has already been presented.
    ///
    /// Returns `false` when the result is stale and was discarded.
    pub fn present(&mut self, result: LookupResult) -> bool {
        if result.sequence <= self.latest_sequence {
            return false;
        }
        self.latest_sequence = result.sequence;
        self.current = Some(result);
        true
    }

    /// Drop the displayed result. The search history is not affected, and
    /// results older than the last presented one stay stale.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&LookupResult> {
        self.current.as_ref()
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn set_units(&mut self, units: UnitSystem) {
        self.units = units;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        condition::WeatherCondition,
        daypart::TimeOfDay,
        history::SearchHistory,
        model::{ForecastSeries, GeoLocation, SearchHistoryEntry, WeatherSnapshot},
    };

    fn result(sequence: u64, city: &str) -> LookupResult {
        LookupResult {
            sequence,
            location: GeoLocation::new(city, 10.0, 20.0).unwrap(),
            snapshot: WeatherSnapshot {
                local_time: "2025-06-05T12:00".into(),
                temperature_c: 30.0,
                relative_humidity_pct: 70.0,
                precipitation_mm: 0.0,
                wind_speed_kmh: 5.0,
                condition_code: 0,
            },
            forecast: ForecastSeries::default(),
            condition: WeatherCondition::ClearSky,
            time_of_day: TimeOfDay::Day,
        }
    }

    #[test]
    fn newer_results_replace_older() {
        let mut state = PresentationState::default();
        assert!(state.present(result(1, "Tokyo")));
        assert!(state.present(result(2, "Oslo")));
        assert_eq!(state.current().unwrap().location.name(), "Oslo");
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut state = PresentationState::default();
        assert!(state.present(result(3, "Oslo")));
        assert!(!state.present(result(2, "Tokyo")));
        assert_eq!(state.current().unwrap().location.name(), "Oslo");
    }

    #[test]
    fn clear_keeps_stale_watermark() {
        let mut state = PresentationState::default();
        state.present(result(5, "Oslo"));
        state.clear();

        assert!(state.current().is_none());
        assert!(!state.present(result(4, "Tokyo")));
        assert!(state.present(result(6, "Lima")));
    }

    #[test]
    fn clearing_display_never_shrinks_history() {
        let history = SearchHistory::new();
        let mut state = PresentationState::new(UnitSystem::Imperial);

        for (seq, city) in ["Tokyo", "Oslo", "Lima"].iter().enumerate() {
            let res = result(seq as u64 + 1, city);
            history.append(SearchHistoryEntry {
                city_name: res.location.name().to_string(),
                local_time: res.snapshot.local_time.clone(),
            });
            state.present(res);
            state.clear();
            state.clear();
        }

        assert_eq!(history.len(), 3);
        assert_eq!(state.units(), UnitSystem::Imperial);
    }

    #[test]
    fn units_switch_without_refetch() {
        let mut state = PresentationState::default();
        state.present(result(1, "Tokyo"));
        state.set_units(UnitSystem::Imperial);

        let shown = state.current().unwrap();
        assert_eq!(state.units().temperature(shown.snapshot.temperature_c), 86.0);
    }
}
