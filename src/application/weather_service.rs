// Weather service - per-location fetch, evaluate, and dispatch
use crate::application::notifier::{NotificationRequest, NotificationSink};
use crate::application::retry::RetryingFetcher;
use crate::domain::evaluation::{EvaluationPolicy, evaluate};
use crate::infrastructure::config::Location;
use crate::infrastructure::open_meteo;
use anyhow::Context;
use chrono::{NaiveDateTime, Timelike};
use std::sync::Arc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Outcome counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub notified: usize,
    pub quiet: usize,
    pub failed: usize,
}

enum Outcome {
    Notified,
    Quiet,
}

#[derive(Clone)]
pub struct WeatherService {
    fetcher: RetryingFetcher,
    sink: Arc<dyn NotificationSink>,
    policy: EvaluationPolicy,
}

impl WeatherService {
    pub fn new(
        fetcher: RetryingFetcher,
        sink: Arc<dyn NotificationSink>,
        policy: EvaluationPolicy,
    ) -> Self {
        Self {
            fetcher,
            sink,
            policy,
        }
    }

    /// Check every location in configuration order.
    ///
    /// Failures are scoped to their location: they are logged with the
    /// location name and counted, and the batch moves on to the next entry.
    /// The shared deadline and token only cut fetches short; already
    /// completed locations stay reported in the summary.
    pub async fn run(
        &self,
        locations: &[Location],
        now: NaiveDateTime,
        deadline: Instant,
        cancel: &CancellationToken,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        for location in locations {
            match self.check_location(location, now, deadline, cancel).await {
                Ok(Outcome::Notified) => summary.notified += 1,
                Ok(Outcome::Quiet) => summary.quiet += 1,
                Err(err) => {
                    summary.failed += 1;
                    tracing::error!(
                        location = %location.name,
                        error = %format!("{err:#}"),
                        "weather check failed"
                    );
                }
            }
        }

        summary
    }

    async fn check_location(
        &self,
        location: &Location,
        now: NaiveDateTime,
        deadline: Instant,
        cancel: &CancellationToken,
    ) -> anyhow::Result<Outcome> {
        let url = open_meteo::forecast_url(location);
        let body = self.fetcher.fetch(&url, deadline, cancel).await?;
        let series = open_meteo::decode_series(&body)
            .with_context(|| format!("malformed forecast payload for {}", location.name))?;

        match evaluate(&self.policy, &series, now) {
            Some(advisory) => {
                let request = NotificationRequest {
                    title: format!("Weather for {}", location.name),
                    message: advisory.message.clone(),
                    icon: advisory.icon,
                    more_info_url: open_meteo::more_info_url(location),
                };
                self.sink
                    .dispatch(&request)
                    .with_context(|| format!("notification dispatch failed for {}", location.name))?;
                tracing::info!(location = %location.name, message = %advisory.message, "notification sent");
                Ok(Outcome::Notified)
            }
            None => {
                let day = self.policy.target_day(now.hour()).label().to_lowercase();
                tracing::info!(location = %location.name, "no rain expected {day}");
                Ok(Outcome::Quiet)
            }
        }
    }
}
