use crate::core::errors::LastfmError;
use crate::core::types::ParameterSet;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{instrument, trace};

/// Transport trait for executing service requests
///
/// One call is one form-encoded POST; the raw body comes back as text.
/// Network failures and non-2xx statuses are transport errors. A non-2xx
/// reply keeps its body so the caller can look for a service error in it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `params` as the body of a POST to `url`
    ///
    /// # Arguments
    /// * `url` - Service endpoint
    /// * `params` - Fully built (and, where needed, signed) parameters
    ///
    /// # Returns
    /// The response body as text
    async fn send(&self, url: &str, params: &ParameterSet) -> Result<String, LastfmError>;
}

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating transport instances
pub struct TransportBuilder {
    config: TransportConfig,
}

impl TransportBuilder {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Build the reqwest-backed transport
    pub fn build(self) -> Result<ReqwestTransport, LastfmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()?;

        Ok(ReqwestTransport {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `Transport` using reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: TransportConfig,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, LastfmError> {
        TransportBuilder::new(TransportConfig::default()).build()
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    #[instrument(skip(self, response), fields(status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<String, LastfmError> {
        let status = response.status();
        let body = response.text().await?;

        trace!("Response body: {}", body);

        if status.is_success() {
            Ok(body)
        } else {
            Err(LastfmError::HttpStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, params), fields(param_count = params.len()))]
    async fn send(&self, url: &str, params: &ParameterSet) -> Result<String, LastfmError> {
        let response = self
            .client
            .post(url)
            .form(params.entries())
            .send()
            .await
            .map_err(|e| LastfmError::NetworkError(format!("Request to {} failed: {}", url, e)))?;

        self.handle_response(response).await
    }
}
