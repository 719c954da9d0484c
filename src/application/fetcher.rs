// Fetcher seam - single-attempt fetch trait and the fetch error taxonomy
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Why a fetch was abandoned before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    DeadlineExceeded,
    Interrupted,
}

impl fmt::Display for CancelCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelCause::DeadlineExceeded => write!(f, "deadline exceeded"),
            CancelCause::Interrupted => write!(f, "run interrupted"),
        }
    }
}

/// Errors surfaced by the retrying fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The deadline passed or the run was cancelled before the fetch
    /// completed. Checked before every attempt and during every backoff.
    #[error("fetch cancelled: {0}")]
    Cancelled(CancelCause),
    /// Every allowed attempt failed; carries the last underlying error.
    #[error("all {attempts} attempts failed for {url}: {last_error}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        last_error: anyhow::Error,
    },
    /// The retry loop exited without a verdict. Unreachable given the loop
    /// bounds; reaching it is a programming error.
    #[error("retry loop ended without a result")]
    Internal,
}

/// One network fetch. Implementations know nothing about retries or weather
/// semantics. A non-success HTTP status is an `Err` exactly like a transport
/// failure.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}
