use crate::{
    Config,
    error::LookupError,
    model::{Forecast, GeoLocation},
    provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// Turns a place name into coordinates.
#[async_trait]
pub trait GeocodingSource: Send + Sync + Debug {
    /// `place` is already trimmed and non-empty.
    async fn resolve(&self, place: &str) -> Result<GeoLocation, LookupError>;
}

/// Fetches current conditions plus the raw hourly series for a location.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, location: &GeoLocation) -> Result<Forecast, LookupError>;
}

/// Construct the Open-Meteo provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenMeteoProvider> {
    OpenMeteoProvider::new(config)
}
