use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
pub struct LastfmConfig {
    pub api_key: Secret<String>,
    pub shared_secret: Secret<String>,
    pub username: String,
    pub session_key: Option<Secret<String>>,
    pub base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for LastfmConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("LastfmConfig", 5)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("shared_secret", "[REDACTED]")?;
        state.serialize_field("username", &self.username)?;
        state.serialize_field(
            "session_key",
            &self.session_key.as_ref().map(|_| "[REDACTED]"),
        )?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for LastfmConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LastfmConfigHelper {
            api_key: String,
            shared_secret: String,
            #[serde(default)]
            username: String,
            session_key: Option<String>,
            base_url: Option<String>,
        }

        let helper = LastfmConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            shared_secret: Secret::new(helper.shared_secret),
            username: helper.username,
            session_key: helper.session_key.map(Secret::new),
            base_url: helper.base_url,
        })
    }
}

impl LastfmConfig {
    /// Create a new configuration with API credentials and no session
    #[must_use]
    pub fn new(api_key: String, shared_secret: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            shared_secret: Secret::new(shared_secret),
            username: String::new(),
            session_key: None,
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY` (e.g., `LASTFM_API_KEY`)
    /// - `{PREFIX}_SHARED_SECRET`
    /// - `{PREFIX}_USERNAME` (optional)
    /// - `{PREFIX}_SESSION_KEY` (optional, obtained through the auth flow)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let api_key_var = format!("{}_API_KEY", prefix);
        let secret_var = format!("{}_SHARED_SECRET", prefix);

        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;

        let shared_secret = env::var(&secret_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_var))?;

        let username = env::var(format!("{}_USERNAME", prefix)).unwrap_or_default();

        let session_key = env::var(format!("{}_SESSION_KEY", prefix))
            .ok()
            .filter(|sk| !sk.is_empty())
            .map(Secret::new);

        let base_url = env::var(format!("{}_BASE_URL", prefix)).ok();

        Ok(Self {
            api_key: Secret::new(api_key),
            shared_secret: Secret::new(shared_secret),
            username,
            session_key,
            base_url,
        })
    }

    /// Create configuration from .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    ///
    /// A missing file is not an error; system environment variables are used.
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Set the username used for user-scoped defaults
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set a previously obtained session key
    #[must_use]
    pub fn session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = Some(Secret::new(session_key.into()));
        self
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Check if this configuration can sign requests
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.shared_secret.expose_secret().is_empty()
    }

    /// Split the credential values off into a shared, refreshable handle
    pub fn credentials(&self) -> SharedCredentials {
        SharedCredentials::new(Credentials {
            api_key: self.api_key.clone(),
            shared_secret: self.shared_secret.clone(),
            username: self.username.clone(),
            session_key: self.session_key.clone(),
        })
    }
}

/// The four credential values a request is built from.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: Secret<String>,
    pub shared_secret: Secret<String>,
    pub username: String,
    pub session_key: Option<Secret<String>>,
}

impl Credentials {
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        let key = self.api_key.expose_secret();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(key)
    }

    pub fn shared_secret(&self) -> Result<&str, ConfigError> {
        let secret = self.shared_secret.expose_secret();
        if secret.is_empty() {
            return Err(ConfigError::MissingSharedSecret);
        }
        Ok(secret)
    }

    pub fn session_key(&self) -> Result<&str, ConfigError> {
        self.session_key
            .as_ref()
            .map(|sk| sk.expose_secret().as_str())
            .filter(|sk| !sk.is_empty())
            .ok_or(ConfigError::MissingSessionKey)
    }
}

/// Process-wide credential handle.
///
/// Clones share one underlying value. Every request reads the current values,
/// so a session key stored after authorization is seen by all later calls.
#[derive(Debug, Clone)]
pub struct SharedCredentials {
    inner: Arc<RwLock<Credentials>>,
}

impl SharedCredentials {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(RwLock::new(credentials)),
        }
    }

    /// Copy of the current values.
    pub fn snapshot(&self) -> Credentials {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_session_key(&self, session_key: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.session_key = Some(Secret::new(session_key.into()));
    }

    pub fn clear_session_key(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.session_key = None;
    }

    pub fn set_username(&self, username: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.username = username.into();
    }

    pub fn has_session(&self) -> bool {
        self.snapshot().session_key().is_ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Shared secret is not configured")]
    MissingSharedSecret,

    #[error("Method requires a session key; complete authorization first")]
    MissingSessionKey,
}
