//! HTTP client for the lead API.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use leadline_core::routes::CREATE_LEAD_PATH;
use leadline_core::{Lead, NewLead};

use crate::error::{ClientError, GENERIC_FAILURE_MESSAGE};
use crate::transport::LeadTransport;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`LeadsClient`].
#[derive(Debug, Clone, Default)]
pub struct LeadsClientConfig {
    /// API base URL. Empty means `LEADLINE_URL`, then `http://127.0.0.1:5000`.
    pub base_url: String,
    /// Request timeout. Zero means 10 seconds.
    pub timeout: Duration,
}

/// Lead API client. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct LeadsClient {
    base_url: String,
    client: reqwest::Client,
}

/// Error body of a non-2xx response. Both fields are optional so that a
/// partial body still yields whatever it has.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    field: Option<String>,
}

impl LeadsClient {
    /// Create a client from `LEADLINE_URL` or the default base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is not a valid URL.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(LeadsClientConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL is not a valid URL, or
    /// `ClientError::Network` if the HTTP client cannot be built.
    pub fn with_config(cfg: LeadsClientConfig) -> Result<Self, ClientError> {
        let base_url = if cfg.base_url.is_empty() {
            std::env::var("LEADLINE_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
        } else {
            cfg.base_url
        };
        let base_url = base_url.trim_end_matches('/').to_owned();

        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        let timeout = if cfg.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            cfg.timeout
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("leadline-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { base_url, client })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl LeadTransport for LeadsClient {
    async fn create_lead(&self, lead: &NewLead) -> Result<Lead, ClientError> {
        let url = format!("{}{}", self.base_url, CREATE_LEAD_PATH);

        let resp = self
            .client
            .post(&url)
            .json(lead)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(ClientError::Json);
        }

        let body = serde_json::from_str::<ApiErrorBody>(&text).ok();
        let (message, field) = match body {
            Some(body) => (body.message, body.field),
            None => (None, None),
        };
        debug!(status = status.as_u16(), field = ?field, "lead submission failed");

        Err(ClientError::Api {
            status_code: status.as_u16(),
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()),
            field,
        })
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Network(err)
    }
}
