//! HTTP client for the homework review API

use compact_str::{CompactString, format_compact};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{
    config::ClientConfig,
    error::{ClientError, Result},
};

/// Pure HTTP client for the homework review API
#[derive(Debug)]
pub struct PracticumApi {
    client: Client,
    config: ClientConfig,
}

impl PracticumApi {
    /// Create a client with a bounded request timeout
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request.timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { client, config })
    }

    /// Fetch homework statuses updated since `from_date`.
    ///
    /// Returns the decoded payload verbatim; shape validation is the
    /// caller's concern.
    #[instrument(skip(self), fields(from_date = %from_date))]
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        let url = self.build_statuses_url(from_date);

        let response = self
            .client
            .get(url.as_str())
            .header(
                "Authorization",
                format!("OAuth {}", self.config.api_token),
            )
            .header("User-Agent", "hwbot")
            .send()
            .await
            .map_err(ClientError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            // Anything but 200 means the body is not worth decoding.
            return Err(ClientError::unexpected_status(status.as_u16()));
        }

        let url_path = response.url().path().to_string();
        let body = response.text().await.map_err(ClientError::Http)?;

        let payload = serde_json::from_str(&body)
            .map_err(|e| ClientError::json_parse(url_path, "Failed to parse response", e))?;
        debug!(bytes = body.len(), "fetched homework statuses");
        Ok(payload)
    }

    /// Build URL for the statuses endpoint
    fn build_statuses_url(&self, from_date: i64) -> CompactString {
        format_compact!("{}?from_date={}", self.config.base_url, from_date)
    }
}
