// HTTP fetcher - reqwest-backed single-attempt fetch
use crate::application::fetcher::Fetcher;
use anyhow::{Context, bail};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(request_timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("error during HTTP request")?;

        let status = response.status();
        if !status.is_success() {
            bail!("unexpected status code: {status}");
        }

        let body = response
            .bytes()
            .await
            .context("error reading response body")?;

        Ok(body.to_vec())
    }
}
