use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    Config,
    error::LookupError,
    model::{Forecast, GeoLocation, HourlySeries, WeatherSnapshot},
};

use super::{ForecastSource, GeocodingSource};

const GEOCODING: &str = "geocoding";
const FORECAST: &str = "forecast";

const USER_AGENT: &str = concat!("skyview/", env!("CARGO_PKG_VERSION"));
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation,wind_speed_10m,weather_code";
const HOURLY_FIELDS: &str = "temperature_2m";

/// Open-Meteo geocoding and forecast client. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }

    async fn fetch_body(
        &self,
        service: &'static str,
        request: RequestBuilder,
    ) -> Result<String, LookupError> {
        let res = request
            .send()
            .await
            .map_err(|source| LookupError::Network { service, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| LookupError::Network { service, source })?;

        if !status.is_success() {
            warn!(service, %status, "request failed");
            return Err(LookupError::Status { service, status, body: truncate_body(&body) });
        }

        Ok(body)
    }
}

#[async_trait]
impl GeocodingSource for OpenMeteoProvider {
    async fn resolve(&self, place: &str) -> Result<GeoLocation, LookupError> {
        // The name goes in percent-encoded; reqwest's form encoding would turn spaces into '+'.
        let url = format!("{}?name={}&count=1", self.geocoding_url, urlencoding::encode(place));
        debug!(%url, "geocoding request");

        let body = self.fetch_body(GEOCODING, self.http.get(&url)).await?;
        let location = parse_geocoding(place, &body)?;

        info!(
            "Resolved '{}' to {} ({:.4}, {:.4})",
            place,
            location.name(),
            location.latitude(),
            location.longitude()
        );
        Ok(location)
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoProvider {
    async fn fetch(&self, location: &GeoLocation) -> Result<Forecast, LookupError> {
        let latitude = format!("{:.4}", location.latitude());
        let longitude = format!("{:.4}", location.longitude());
        debug!(%latitude, %longitude, "forecast request");

        let request = self.http.get(&self.forecast_url).query(&[
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("current", CURRENT_FIELDS),
            ("hourly", HOURLY_FIELDS),
            ("timezone", "auto"),
        ]);

        let body = self.fetch_body(FORECAST, request).await?;
        let forecast = parse_forecast(&body)?;

        info!(
            "Fetched forecast for {} at {} with {} hourly points",
            location.name(),
            forecast.snapshot.local_time,
            forecast.hourly.len()
        );
        Ok(forecast)
    }
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResponse {
    results: Option<Vec<OmGeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResult {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: Option<OmCurrent>,
    hourly: Option<OmHourly>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    time: Option<String>,
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    precipitation: Option<f64>,
    wind_speed_10m: Option<f64>,
    weather_code: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Option<Vec<String>>,
    temperature_2m: Option<Vec<f64>>,
}

fn parse_geocoding(place: &str, body: &str) -> Result<GeoLocation, LookupError> {
    let parsed: OmGeocodingResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::malformed(GEOCODING, e.to_string()))?;

    let Some(first) = parsed.results.and_then(|results| results.into_iter().next()) else {
        warn!("No results found for location '{}'", place);
        return Err(LookupError::NotFound(place.to_string()));
    };

    GeoLocation::new(
        required(GEOCODING, first.name, "results[0].name")?,
        required(GEOCODING, first.latitude, "results[0].latitude")?,
        required(GEOCODING, first.longitude, "results[0].longitude")?,
    )
}

fn parse_forecast(body: &str) -> Result<Forecast, LookupError> {
    let parsed: OmForecastResponse =
        serde_json::from_str(body).map_err(|e| LookupError::malformed(FORECAST, e.to_string()))?;

    let current = required(FORECAST, parsed.current, "current")?;
    let snapshot = WeatherSnapshot {
        local_time: required(FORECAST, current.time, "current.time")?,
        temperature_c: required(FORECAST, current.temperature_2m, "current.temperature_2m")?,
        relative_humidity_pct: required(
            FORECAST,
            current.relative_humidity_2m,
            "current.relative_humidity_2m",
        )?,
        precipitation_mm: required(FORECAST, current.precipitation, "current.precipitation")?,
        wind_speed_kmh: required(FORECAST, current.wind_speed_10m, "current.wind_speed_10m")?,
        condition_code: required(FORECAST, current.weather_code, "current.weather_code")?,
    };

    let hourly = required(FORECAST, parsed.hourly, "hourly")?;
    let hourly = HourlySeries::new(
        required(FORECAST, hourly.time, "hourly.time")?,
        required(FORECAST, hourly.temperature_2m, "hourly.temperature_2m")?,
    )?;

    Ok(Forecast { snapshot, hourly })
}

fn required<T>(service: &'static str, value: Option<T>, field: &str) -> Result<T, LookupError> {
    value.ok_or_else(|| LookupError::malformed(service, format!("missing field `{field}`")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
