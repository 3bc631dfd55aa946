//! Configuration for the homework review API client

use std::time::Duration;

use compact_str::CompactString;

use super::error::{ClientError, Result};

/// Fixed endpoint serving homework review statuses.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Main configuration for the review API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Homework statuses endpoint
    pub base_url: CompactString,
    /// OAuth token for the review API
    pub api_token: CompactString,
    /// Request configuration
    pub request: RequestConfig,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a client configuration against the fixed endpoint
    pub fn new(api_token: impl Into<CompactString>) -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.into(),
            api_token: api_token.into(),
            request: RequestConfig::default(),
        }
    }

    /// Point the client at a different endpoint (tests, staging)
    pub fn with_base_url(mut self, base_url: impl Into<CompactString>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::config_validation(
                "endpoint",
                "Base URL cannot be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::config_validation(
                "endpoint",
                "Base URL must start with http:// or https://",
            ));
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(ClientError::config_validation(
                "endpoint",
                "Base URL is not a valid URL format",
            ));
        }

        if self.api_token.is_empty() {
            return Err(ClientError::config_validation(
                "api_token",
                "API token cannot be empty",
            ));
        }

        if self.request.timeout.is_zero() {
            return Err(ClientError::config_validation(
                "timeout",
                "Timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}
