// Forecast evaluation - target day selection, cold classification, message composition
use crate::domain::forecast::ForecastSeries;
use chrono::{Days, NaiveDateTime, Timelike};

/// Icon selector for the dispatched notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Rain,
    Snow,
    Cold,
    Sun,
}

/// Which day the current hour selects for notification purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDay {
    Today,
    Tomorrow,
}

impl TargetDay {
    pub fn label(self) -> &'static str {
        match self {
            TargetDay::Today => "Today",
            TargetDay::Tomorrow => "Tomorrow",
        }
    }
}

/// One row of the cold classification table.
#[derive(Debug, Clone)]
pub struct ColdBand {
    pub max_temp_c: f64,
    pub message: String,
    pub icon: Icon,
}

impl ColdBand {
    pub fn new(max_temp_c: f64, message: &str, icon: Icon) -> Self {
        Self {
            max_temp_c,
            message: message.to_string(),
            icon,
        }
    }
}

/// Evaluation parameters: the day boundary hour and the cold bands.
///
/// These are fixed policy in production but passed in explicitly so tests
/// can substitute their own values.
#[derive(Debug, Clone)]
pub struct EvaluationPolicy {
    /// Hours in [0, boundary) target today; later hours target tomorrow.
    pub day_boundary_hour: u32,
    /// Ordered ascending by `max_temp_c`; the first band whose bound is not
    /// exceeded wins.
    pub bands: Vec<ColdBand>,
    /// Message and icon for temperatures above every band.
    pub mild_message: String,
    pub mild_icon: Icon,
}

impl Default for EvaluationPolicy {
    fn default() -> Self {
        Self {
            day_boundary_hour: 14,
            bands: vec![
                ColdBand::new(0.0, "Extreme cold warning", Icon::Snow),
                ColdBand::new(5.0, "Freezing cold warning", Icon::Snow),
                ColdBand::new(10.0, "Very cold", Icon::Cold),
                ColdBand::new(15.0, "Going to be cold", Icon::Cold),
                ColdBand::new(20.0, "Slightly cold", Icon::Cold),
                ColdBand::new(25.0, "A bit chilly", Icon::Sun),
            ],
            mild_message: "Fine weather".to_string(),
            mild_icon: Icon::Sun,
        }
    }
}

impl EvaluationPolicy {
    pub fn target_day(&self, hour: u32) -> TargetDay {
        if hour < self.day_boundary_hour {
            TargetDay::Today
        } else {
            TargetDay::Tomorrow
        }
    }

    /// Classify a minimum temperature into its band. Bounds are inclusive:
    /// a temperature exactly at `max_temp_c` belongs to that band.
    fn classify(&self, min_temp_c: f64) -> (&str, Icon) {
        for band in &self.bands {
            if min_temp_c <= band.max_temp_c {
                return (&band.message, band.icon);
            }
        }
        (&self.mild_message, self.mild_icon)
    }
}

/// A non-empty notification decision: what to say and which icon to show.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherAdvisory {
    pub message: String,
    pub icon: Icon,
}

/// Evaluate a forecast series against the local wall-clock time.
///
/// Returns `None` when there is nothing to notify: the series has no record
/// for the target date, or no rain is expected and the classification
/// produced no message. Pure; `now` is always passed in, never read here.
pub fn evaluate(
    policy: &EvaluationPolicy,
    series: &ForecastSeries,
    now: NaiveDateTime,
) -> Option<WeatherAdvisory> {
    let target = policy.target_day(now.hour());
    let target_date = match target {
        TargetDay::Today => now.date(),
        // Calendar-day increment rather than now + 24h, so the target date
        // is stable across daylight-saving transitions.
        TargetDay::Tomorrow => now.date().checked_add_days(Days::new(1))?,
    };

    let day = series.day(target_date)?;

    let (cold_message, cold_icon) = policy.classify(day.min_temp_c);
    let rain = day.precipitation_mm > 0.0;
    // Rain outranks the temperature icon; the cold message still rides along.
    let icon = if rain { Icon::Rain } else { cold_icon };

    let message = match (rain, cold_message.is_empty()) {
        (true, false) => format!("{}: Rain Expected. {}", target.label(), cold_message),
        (true, true) => format!("{}: Rain Expected.", target.label()),
        (false, false) => format!("{}: {}", target.label(), cold_message),
        (false, true) => return None,
    };

    Some(WeatherAdvisory { message, icon })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn at(s: &str, hour: u32) -> NaiveDateTime {
        date(s).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn series_of(days: &[(&str, f64, f64)]) -> ForecastSeries {
        let dates = days.iter().map(|&(d, _, _)| date(d)).collect();
        let precipitation = days.iter().map(|&(_, p, _)| p).collect();
        let min_temps = days.iter().map(|&(_, _, t)| t).collect();
        ForecastSeries::from_columns(dates, precipitation, min_temps).unwrap()
    }

    fn classify(min_temp_c: f64) -> (String, Icon) {
        let policy = EvaluationPolicy::default();
        let (message, icon) = policy.classify(min_temp_c);
        (message.to_string(), icon)
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        assert_eq!(classify(0.0), ("Extreme cold warning".to_string(), Icon::Snow));
        assert_eq!(classify(25.0), ("A bit chilly".to_string(), Icon::Sun));
        assert_eq!(classify(25.0001), ("Fine weather".to_string(), Icon::Sun));
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(classify(-12.0), ("Extreme cold warning".to_string(), Icon::Snow));
        assert_eq!(classify(3.0), ("Freezing cold warning".to_string(), Icon::Snow));
        assert_eq!(classify(7.5), ("Very cold".to_string(), Icon::Cold));
        assert_eq!(classify(12.0), ("Going to be cold".to_string(), Icon::Cold));
        assert_eq!(classify(18.0), ("Slightly cold".to_string(), Icon::Cold));
        assert_eq!(classify(22.0), ("A bit chilly".to_string(), Icon::Sun));
        assert_eq!(classify(30.0), ("Fine weather".to_string(), Icon::Sun));
    }

    #[test]
    fn test_morning_targets_today() {
        // 09:00, no rain, min temp 12 — today's record drives the message.
        let policy = EvaluationPolicy::default();
        let series = series_of(&[("2024-05-01", 0.0, 12.0), ("2024-05-02", 5.0, 3.0)]);

        let advisory = evaluate(&policy, &series, at("2024-05-01", 9)).unwrap();
        assert_eq!(advisory.message, "Today: Going to be cold");
        assert_eq!(advisory.icon, Icon::Cold);
    }

    #[test]
    fn test_evening_targets_tomorrow() {
        // 20:00, rain tomorrow with a mild minimum — rain text only.
        let policy = EvaluationPolicy::default();
        let series = series_of(&[("2024-05-01", 0.0, 12.0), ("2024-05-02", 2.5, 28.0)]);

        let advisory = evaluate(&policy, &series, at("2024-05-01", 20)).unwrap();
        assert_eq!(advisory.message, "Tomorrow: Rain Expected.");
        assert_eq!(advisory.icon, Icon::Rain);
    }

    #[test]
    fn test_boundary_hour_switches_target_day() {
        let policy = EvaluationPolicy::default();
        assert_eq!(policy.target_day(13), TargetDay::Today);
        assert_eq!(policy.target_day(14), TargetDay::Tomorrow);
        assert_eq!(policy.target_day(0), TargetDay::Today);
        assert_eq!(policy.target_day(23), TargetDay::Tomorrow);
    }

    #[test]
    fn test_rain_icon_outranks_cold_icon() {
        let policy = EvaluationPolicy::default();
        let series = series_of(&[("2024-05-01", 5.0, -3.0)]);

        let advisory = evaluate(&policy, &series, at("2024-05-01", 9)).unwrap();
        assert_eq!(advisory.icon, Icon::Rain);
        assert_eq!(advisory.message, "Today: Rain Expected. Extreme cold warning");
    }

    #[test]
    fn test_missing_target_date_is_empty_decision() {
        let policy = EvaluationPolicy::default();
        let series = series_of(&[("2024-05-03", 4.0, 1.0)]);

        assert_eq!(evaluate(&policy, &series, at("2024-05-01", 9)), None);
    }

    #[test]
    fn test_no_rain_and_no_band_message_is_empty_decision() {
        // A policy whose mild fallback carries no text produces no advisory
        // for a dry, mild day.
        let policy = EvaluationPolicy {
            mild_message: String::new(),
            ..EvaluationPolicy::default()
        };
        let series = series_of(&[("2024-05-01", 0.0, 30.0)]);

        assert_eq!(evaluate(&policy, &series, at("2024-05-01", 9)), None);

        // Rain alone still notifies.
        let wet = series_of(&[("2024-05-01", 1.0, 30.0)]);
        let advisory = evaluate(&policy, &wet, at("2024-05-01", 9)).unwrap();
        assert_eq!(advisory.message, "Today: Rain Expected.");
    }

    #[test]
    fn test_evaluate_is_pure() {
        let policy = EvaluationPolicy::default();
        let series = series_of(&[("2024-05-01", 2.0, 4.0)]);
        let now = at("2024-05-01", 9);

        assert_eq!(evaluate(&policy, &series, now), evaluate(&policy, &series, now));
    }

    #[test]
    fn test_tomorrow_crosses_month_boundary() {
        let policy = EvaluationPolicy::default();
        let series = series_of(&[("2024-05-31", 0.0, 12.0), ("2024-06-01", 3.0, 18.0)]);

        let advisory = evaluate(&policy, &series, at("2024-05-31", 18)).unwrap();
        assert_eq!(advisory.message, "Tomorrow: Rain Expected. Slightly cold");
        assert_eq!(advisory.icon, Icon::Rain);
    }
}
