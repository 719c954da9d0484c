// Retrying fetch - bounded retries with exponential backoff and jitter
use crate::application::fetcher::{CancelCause, FetchError, Fetcher};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Backoff parameters for the retrying fetch.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 means exactly one attempt.
    pub max_retries: u32,
    pub initial_delay: Duration,
    /// Cap applied after each doubling of the base delay.
    pub max_delay: Duration,
    /// Exclusive upper bound of the uniform jitter added to each backoff.
    pub jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            jitter: Duration::from_millis(1000),
        }
    }
}

/// Wraps a [`Fetcher`] with bounded retries.
///
/// Backoff state lives entirely within one `fetch` call; successive or
/// concurrent calls do not interact, and every call starts over at the
/// initial delay.
#[derive(Clone)]
pub struct RetryingFetcher {
    inner: Arc<dyn Fetcher>,
    policy: RetryPolicy,
}

impl RetryingFetcher {
    pub fn new(inner: Arc<dyn Fetcher>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// Fetch `url`, retrying failed attempts until the retry budget, the
    /// deadline, or the cancellation token runs out.
    ///
    /// The backoff sleep races against the deadline and the token, so a
    /// cancellation mid-backoff aborts promptly instead of finishing the
    /// sleep first.
    pub async fn fetch(
        &self,
        url: &str,
        deadline: Instant,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, FetchError> {
        let mut delay = self.policy.initial_delay;

        for attempt in 0..=self.policy.max_retries {
            if cancel.is_cancelled() {
                return Err(FetchError::Cancelled(CancelCause::Interrupted));
            }
            if Instant::now() >= deadline {
                return Err(FetchError::Cancelled(CancelCause::DeadlineExceeded));
            }

            let err = match self.inner.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            tracing::warn!(attempt = attempt + 1, url, error = %err, "fetch attempt failed");

            if attempt == self.policy.max_retries {
                return Err(FetchError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: self.policy.max_retries + 1,
                    last_error: err,
                });
            }

            let jitter = if self.policy.jitter.is_zero() {
                Duration::ZERO
            } else {
                rand::thread_rng().gen_range(Duration::ZERO..self.policy.jitter)
            };

            tokio::select! {
                _ = tokio::time::sleep(delay + jitter) => {}
                _ = tokio::time::sleep_until(deadline) => {
                    return Err(FetchError::Cancelled(CancelCause::DeadlineExceeded));
                }
                _ = cancel.cancelled() => {
                    return Err(FetchError::Cancelled(CancelCause::Interrupted));
                }
            }

            delay = (delay * 2).min(self.policy.max_delay);
        }

        Err(FetchError::Internal)
    }
}
