//! Picks the short-range forecast window out of the provider's hourly series.

use crate::model::{ForecastEntry, ForecastSeries};

/// Number of hourly points shown after the current snapshot.
pub const FORECAST_WINDOW: usize = 3;

/// Select the hourly points that follow `snapshot_time`.
///
/// The first entry of `hourly_times` that equals `snapshot_time` anchors the
/// window, which then covers the next [`FORECAST_WINDOW`] entries. Without a
/// match the window starts at the beginning of the series. A short or empty
/// series just yields fewer entries.
pub fn align(snapshot_time: &str, hourly_times: &[String], hourly_temps: &[f64]) -> ForecastSeries {
    let start = hourly_times
        .iter()
        .position(|t| t == snapshot_time)
        .map_or(0, |k| k + 1);

    let entries = hourly_times
        .iter()
        .zip(hourly_temps)
        .skip(start)
        .take(FORECAST_WINDOW)
        .map(|(time, temp)| ForecastEntry { local_time: time.clone(), temperature_c: *temp })
        .collect();

    ForecastSeries(entries)
}
