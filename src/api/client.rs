use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Client for one poll service instance
#[derive(Debug, Clone)]
pub struct PollClient {
    pub(super) client: Client,
    base_url: String,
}

impl PollClient {
    /// Create a client for `base_url`
    ///
    /// The URL must be absolute http or https. A trailing slash is dropped.
    /// `timeout` of `None` leaves the transport default in place.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let url = url::Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let mut builder =
            Client::builder().user_agent(format!("poll-client/{}", env!("CARGO_PKG_VERSION")));

        // Only override the transport default when configured
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[api]` section of the configuration
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(
            &config.base_url,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Status and full body text of a completed response
pub(super) async fn read_response(response: Response) -> ApiResult<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await?;
    tracing::debug!("Response {} ({} bytes)", status, body.len());
    Ok((status, body))
}

/// Decode a successful body into its typed record
pub(super) fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { source })
}

pub(super) fn request_failed(status: StatusCode, body: String) -> ApiError {
    tracing::warn!("Unexpected status {}: {}", status, body);
    ApiError::RequestFailed { status, body }
}
