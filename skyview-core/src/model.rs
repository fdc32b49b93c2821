use serde::{Deserialize, Serialize};

use crate::{
    align::FORECAST_WINDOW, condition::WeatherCondition, daypart::TimeOfDay, error::LookupError,
};

/// A resolved place: canonical display name plus coordinates.
///
/// Coordinates are checked on construction and the fields are private, so a
/// `GeoLocation` always lies within `[-90, 90] x [-180, 180]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoLocation")]
pub struct GeoLocation {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoLocation {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoLocation> for GeoLocation {
    type Error = LookupError;

    fn try_from(raw: RawGeoLocation) -> Result<Self, Self::Error> {
        GeoLocation::new(raw.name, raw.latitude, raw.longitude)
    }
}

impl GeoLocation {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, LookupError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LookupError::malformed(
                "geocoding",
                format!("latitude {latitude} is out of range"),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LookupError::malformed(
                "geocoding",
                format!("longitude {longitude} is out of range"),
            ));
        }

        Ok(Self { name: name.into(), latitude, longitude })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Current conditions at the queried location.
///
/// `local_time` is the provider's `YYYY-MM-DDTHH:MM` string, already local to
/// the location and without an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub local_time: String,
    pub temperature_c: f64,
    pub relative_humidity_pct: f64,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    pub condition_code: i32,
}

/// Raw hourly series as returned by the forecast provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HourlySeries {
    times: Vec<String>,
    temperatures_c: Vec<f64>,
}

impl HourlySeries {
    /// Build a series from parallel arrays, which must be the same length.
    pub fn new(times: Vec<String>, temperatures_c: Vec<f64>) -> Result<Self, LookupError> {
        if times.len() != temperatures_c.len() {
            return Err(LookupError::malformed(
                "forecast",
                format!(
                    "hourly series has {} timestamps but {} temperatures",
                    times.len(),
                    temperatures_c.len()
                ),
            ));
        }

        Ok(Self { times, temperatures_c })
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    pub fn temperatures_c(&self) -> &[f64] {
        &self.temperatures_c
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Everything the forecast provider returns for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub snapshot: WeatherSnapshot,
    pub hourly: HourlySeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub local_time: String,
    pub temperature_c: f64,
}

/// Up to three hourly points following the snapshot, in time order.
///
/// Built by [`crate::align::align`]; deserializing rejects more than
/// [`FORECAST_WINDOW`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ForecastEntry>")]
pub struct ForecastSeries(pub(crate) Vec<ForecastEntry>);

impl TryFrom<Vec<ForecastEntry>> for ForecastSeries {
    type Error = String;

    fn try_from(entries: Vec<ForecastEntry>) -> Result<Self, Self::Error> {
        if entries.len() > FORECAST_WINDOW {
            return Err(format!(
                "forecast series has {} entries, at most {FORECAST_WINDOW} allowed",
                entries.len()
            ));
        }
        Ok(Self(entries))
    }
}

impl ForecastSeries {
    pub fn entries(&self) -> &[ForecastEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a ForecastEntry;
    type IntoIter = std::slice::Iter<'a, ForecastEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub city_name: String,
    pub local_time: String,
}

impl SearchHistoryEntry {
    /// Label shown in history lists, e.g. `Tokyo – 2025-06-05T18:00`.
    pub fn label(&self) -> String {
        format!("{} – {}", self.city_name, self.local_time)
    }
}

/// Result of one successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Monotonically increasing per service, assigned when the lookup starts.
    pub sequence: u64,
    pub location: GeoLocation,
    pub snapshot: WeatherSnapshot,
    pub forecast: ForecastSeries,
    pub condition: WeatherCondition,
    pub time_of_day: TimeOfDay,
}
