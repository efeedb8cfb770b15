use crate::error::AppError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const FEED_TIMEOUT: Duration = Duration::from_secs(12);

/// Shared HTTP client for every feed; one request per miss, bounded timeout.
#[derive(Clone)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(FEED_TIMEOUT)
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// # Errors
    ///
    /// Will return `Err` on a network failure, a non-success status, or a
    /// payload that does not deserialize.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(url));
        }
        if !status.is_success() {
            return Err(AppError::Network(format!("{url} returned {status}")));
        }
        Ok(resp.json().await?)
    }
}
