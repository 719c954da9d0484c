// Open-Meteo client pieces - URL construction and payload decoding
use crate::domain::forecast::ForecastSeries;
use crate::infrastructure::config::Location;
use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

const OPEN_METEO_BASE: &str = "https://api.open-meteo.com/v1";
const ACCUWEATHER_BASE: &str = "https://www.accuweather.com";

/// Daily forecast endpoint for one location. The provider resolves the
/// local time zone (`timezone=auto`), so dates arrive as local calendar
/// dates for the coordinates.
pub fn forecast_url(location: &Location) -> String {
    format!(
        "{OPEN_METEO_BASE}/forecast?latitude={}&longitude={}&daily=precipitation_sum,temperature_2m_min&timezone=auto",
        location.latitude, location.longitude
    )
}

/// AccuWeather forecast page offered behind the "More Info" action.
pub fn more_info_url(location: &Location) -> String {
    format!(
        "{ACCUWEATHER_BASE}/en/gr/{}/{}/weather-forecast/{}",
        urlencoding::encode(&location.name),
        location.city_id,
        location.city_id
    )
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyColumns,
}

/// Parallel daily columns as Open-Meteo returns them. Absent columns
/// decode as empty and fail series validation rather than decoding.
#[derive(Debug, Deserialize)]
struct DailyColumns {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    precipitation_sum: Vec<f64>,
    #[serde(default, rename = "temperature_2m_min")]
    temperature_min: Vec<f64>,
}

/// Decode a forecast payload and assemble the validated series.
pub fn decode_series(body: &[u8]) -> anyhow::Result<ForecastSeries> {
    let response: ForecastResponse =
        serde_json::from_slice(body).context("failed to parse forecast response")?;
    let daily = response.daily;

    let dates = daily
        .time
        .iter()
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid forecast date: {raw}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let series = ForecastSeries::from_columns(dates, daily.precipitation_sum, daily.temperature_min)?;
    Ok(series)
}
