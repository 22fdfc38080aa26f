use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use crate::application::{AppError, AppResult, PageFetcher};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// GETs the forum listing page. A slow upstream hits the client timeout and
/// becomes a transient per-cycle failure; the timer retries on the next tick.
pub struct ForumFetcher {
    client: reqwest::Client,
    url: String,
}

impl ForumFetcher {
    pub fn new(url: String) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AppError::Fetch(e.to_string()))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl PageFetcher for ForumFetcher {
    async fn fetch_page(&self) -> AppResult<String> {
        let resp = self
            .client
            .get(&self.url)
            .header(USER_AGENT, "dropwatch/1.0")
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9,it;q=0.8")
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let body = resp
            .text()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        tracing::debug!(bytes = body.len(), url = %self.url, "listing page fetched");
        Ok(body)
    }
}
