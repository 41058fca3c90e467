use crate::core::config::LastfmConfig;
use crate::core::errors::LastfmError;
use crate::core::kernel::{ReqwestTransport, Transport, TransportBuilder, TransportConfig};
use crate::lastfm::client::LastfmClient;
use crate::lastfm::DEFAULT_BASE_URL;

/// Builder for creating Last.fm clients
///
/// A client built without credentials is valid; each call then fails with a
/// configuration error until credentials are supplied.
pub struct LastfmBuilder {
    config: LastfmConfig,
    timeout_seconds: u64,
    user_agent: Option<String>,
}

impl Default for LastfmBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LastfmBuilder {
    /// Create a new `LastfmBuilder` with default settings
    pub fn new() -> Self {
        Self {
            config: LastfmConfig::new(String::new(), String::new()),
            timeout_seconds: TransportConfig::default().timeout_seconds,
            user_agent: None,
        }
    }

    /// Set the whole configuration
    pub fn with_config(mut self, config: LastfmConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API key and shared secret, keeping everything else
    pub fn with_credentials(mut self, api_key: String, shared_secret: String) -> Self {
        let previous = std::mem::replace(
            &mut self.config,
            LastfmConfig::new(api_key, shared_secret),
        );
        self.config.username = previous.username;
        self.config.session_key = previous.session_key;
        self.config.base_url = previous.base_url;
        self
    }

    pub fn with_session_key(mut self, session_key: String) -> Self {
        self.config = self.config.session_key(session_key);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.config = self.config.username(username);
        self
    }

    /// Point the client at another endpoint (a proxy or a compatible service)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    /// Set the HTTP timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Build a client over the reqwest transport
    pub fn build(self) -> Result<LastfmClient<ReqwestTransport>, LastfmError> {
        let mut transport_config = TransportConfig::new().with_timeout(self.timeout_seconds);
        if let Some(user_agent) = self.user_agent.clone() {
            transport_config = transport_config.with_user_agent(user_agent);
        }

        let transport = TransportBuilder::new(transport_config).build()?;
        Ok(self.build_with_transport(transport))
    }

    /// Build a client over any transport
    pub fn build_with_transport<T: Transport>(self, transport: T) -> LastfmClient<T> {
        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        LastfmClient::new(transport, self.config.credentials(), base_url)
    }
}

/// Create a client from configuration with default transport settings
pub fn create_lastfm_client(
    config: LastfmConfig,
) -> Result<LastfmClient<ReqwestTransport>, LastfmError> {
    LastfmBuilder::new().with_config(config).build()
}
