//! Core library for the `skyview` CLI.
//!
//! This crate defines:
//! - Place-name resolution and forecast retrieval against Open-Meteo
//! - Pure transforms: hourly alignment, unit conversion, weather-code
//!   categories, time-of-day buckets
//! - The append-only search history and the per-front-end presentation state
//! - Configuration handling
//!
//! It is used by `skyview-cli`, but can also be reused by other front ends.

pub mod align;
pub mod condition;
pub mod config;
pub mod daypart;
pub mod error;
pub mod history;
pub mod lookup;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod units;

pub use align::align;
pub use condition::{WeatherCondition, describe};
pub use config::Config;
pub use daypart::{TimeOfDay, classify};
pub use error::{ErrorKind, LookupError};
pub use history::SearchHistory;
pub use lookup::WeatherService;
pub use model::{
    Forecast, ForecastEntry, ForecastSeries, GeoLocation, HourlySeries, LookupResult,
    SearchHistoryEntry, WeatherSnapshot,
};
pub use presentation::PresentationState;
pub use provider::{ForecastSource, GeocodingSource, openmeteo::OpenMeteoProvider};
pub use units::{UnitSystem, celsius_to_fahrenheit, kmh_to_mph};
