use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tracing::{info, instrument};

use crate::{
    Config,
    align::align,
    condition::WeatherCondition,
    daypart::TimeOfDay,
    error::LookupError,
    history::SearchHistory,
    model::{LookupResult, SearchHistoryEntry},
    provider::{ForecastSource, GeocodingSource, provider_from_config},
};

/// Runs place name -> coordinates -> forecast -> derived values.
///
/// A lookup either yields a complete [`LookupResult`] and one new history
/// entry, or an error and no history entry.
#[derive(Debug)]
pub struct WeatherService {
    geocoder: Box<dyn GeocodingSource>,
    forecaster: Box<dyn ForecastSource>,
    history: Arc<SearchHistory>,
    last_sequence: AtomicU64,
}

impl WeatherService {
    pub fn new(geocoder: Box<dyn GeocodingSource>, forecaster: Box<dyn ForecastSource>) -> Self {
        Self::with_history(geocoder, forecaster, Arc::new(SearchHistory::new()))
    }

    /// Service backed by the Open-Meteo provider described by `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = provider_from_config(config)?;
        Ok(Self::new(Box::new(provider.clone()), Box::new(provider)))
    }

    pub fn with_history(
        geocoder: Box<dyn GeocodingSource>,
        forecaster: Box<dyn ForecastSource>,
        history: Arc<SearchHistory>,
    ) -> Self {
        Self { geocoder, forecaster, history, last_sequence: AtomicU64::new(0) }
    }

    pub fn history(&self) -> &Arc<SearchHistory> {
        &self.history
    }

    #[instrument(skip(self))]
    pub async fn lookup(&self, place: &str) -> Result<LookupResult, LookupError> {
        let sequence = self.last_sequence.fetch_add(1, Ordering::SeqCst) + 1;

        let place = place.trim();
        if place.is_empty() {
            return Err(LookupError::EmptyPlaceName);
        }

        let location = self.geocoder.resolve(place).await?;
        let forecast = self.forecaster.fetch(&location).await?;

        let snapshot = forecast.snapshot;
        let series = align(
            &snapshot.local_time,
            forecast.hourly.times(),
            forecast.hourly.temperatures_c(),
        );
        let condition = WeatherCondition::from_code(snapshot.condition_code);
        let time_of_day = TimeOfDay::classify(&snapshot.local_time);

        self.history.append(SearchHistoryEntry {
            city_name: location.name().to_string(),
            local_time: snapshot.local_time.clone(),
        });

        info!(sequence, city = location.name(), %condition, %time_of_day, "lookup complete");

        Ok(LookupResult { sequence, location, snapshot, forecast: series, condition, time_of_day })
    }
}
