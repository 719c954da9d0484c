// Forecast domain model - validated, date-keyed daily forecast data
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

/// One day of forecast data for a single location. The calendar date lives
/// in the series key.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub precipitation_mm: f64,
    pub min_temp_c: f64,
}

/// Validation failures when assembling a series from provider columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("forecast payload contained no daily data")]
    EmptyData,
    #[error(
        "forecast column lengths differ: {dates} dates, {precipitation} precipitation values, {min_temps} minimum temperatures"
    )]
    LengthMismatch {
        dates: usize,
        precipitation: usize,
        min_temps: usize,
    },
}

/// Daily forecasts for one location, keyed by calendar date.
///
/// Construction validates the provider's parallel columns, so a series that
/// exists is internally consistent and evaluation never re-checks it.
#[derive(Debug, Clone, Default)]
pub struct ForecastSeries {
    days: BTreeMap<NaiveDate, DailyForecast>,
}

impl ForecastSeries {
    /// Build a series from the provider's parallel daily columns.
    ///
    /// Fails with `EmptyData` if the date or precipitation column is empty,
    /// and with `LengthMismatch` if the column lengths disagree.
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        precipitation: Vec<f64>,
        min_temps: Vec<f64>,
    ) -> Result<Self, ForecastError> {
        if dates.is_empty() || precipitation.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if dates.len() != precipitation.len() || dates.len() != min_temps.len() {
            return Err(ForecastError::LengthMismatch {
                dates: dates.len(),
                precipitation: precipitation.len(),
                min_temps: min_temps.len(),
            });
        }

        let days = dates
            .into_iter()
            .zip(precipitation)
            .zip(min_temps)
            .map(|((date, precipitation_mm), min_temp_c)| {
                (
                    date,
                    DailyForecast {
                        precipitation_mm,
                        min_temp_c,
                    },
                )
            })
            .collect();

        Ok(Self { days })
    }

    /// Look up the forecast for a specific calendar date.
    pub fn day(&self, date: NaiveDate) -> Option<&DailyForecast> {
        self.days.get(&date)
    }
}
