// Main entry point - Configuration, dependency wiring, and the batch run
mod application;
mod domain;
mod infrastructure;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::application::retry::{RetryPolicy, RetryingFetcher};
use crate::application::weather_service::WeatherService;
use crate::domain::evaluation::EvaluationPolicy;
use crate::infrastructure::config::{load_locations, load_settings};
use crate::infrastructure::desktop_notifier::DesktopNotifier;
use crate::infrastructure::http_fetcher::HttpFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_settings()?;
    let locations = load_locations()?;
    if locations.is_empty() {
        tracing::warn!("no locations configured, nothing to do");
        return Ok(());
    }

    // Wire the fetch pipeline (infrastructure behind the application seams)
    let fetcher = HttpFetcher::new(Duration::from_secs(settings.fetch.request_timeout_secs))?;
    let retrying = RetryingFetcher::new(
        Arc::new(fetcher),
        RetryPolicy {
            max_retries: settings.fetch.max_retries,
            initial_delay: Duration::from_millis(settings.fetch.initial_backoff_ms),
            max_delay: Duration::from_millis(settings.fetch.max_backoff_ms),
            jitter: Duration::from_millis(settings.fetch.jitter_ms),
        },
    );
    let sink = Arc::new(DesktopNotifier::new(
        settings.notify.app_id.clone(),
        PathBuf::from(&settings.notify.icon_dir),
    ));
    let service = WeatherService::new(retrying, sink, EvaluationPolicy::default());

    // One deadline and one cancellation token govern the whole batch.
    let deadline = Instant::now() + Duration::from_secs(settings.fetch.run_deadline_secs);
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, cancelling remaining checks");
            signal_cancel.cancel();
        }
    });

    let summary = service
        .run(&locations, Local::now().naive_local(), deadline, &cancel)
        .await;

    tracing::info!(
        notified = summary.notified,
        quiet = summary.quiet,
        failed = summary.failed,
        "weather check complete"
    );

    Ok(())
}
