use crate::core::config::SharedCredentials;
use crate::core::errors::LastfmError;
use crate::core::kernel::{Signer, Transport};
use crate::core::types::{MethodDescriptor, ParameterSet, Record};
use crate::lastfm::binding::Binding;
use crate::lastfm::codec::XmlCodec;
use crate::lastfm::registry::{all_methods, lookup_method};
use crate::lastfm::request::RequestBuilder;
use crate::lastfm::signer::Md5Signer;
use crate::lastfm::AUTH_URL;
use reqwest::Url;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Last.fm client using kernel architecture
///
/// Typed bindings (`artist_search`, `track_love`, ...) are generated from the
/// method table; `invoke` reaches the same methods by name.
pub struct LastfmClient<T: Transport> {
    transport: T,
    credentials: SharedCredentials,
    signer: Arc<dyn Signer>,
    codec: XmlCodec,
    base_url: String,
}

impl<T: Transport> LastfmClient<T> {
    /// Create a new client with dependency injection
    pub fn new(transport: T, credentials: SharedCredentials, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            credentials,
            signer: Arc::new(Md5Signer),
            codec: XmlCodec,
            base_url: base_url.into(),
        }
    }

    /// Replace the request signer
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = signer;
        self
    }

    /// Get the endpoint every request is posted to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared credential handle; updates are seen by the next call
    pub fn credentials(&self) -> &SharedCredentials {
        &self.credentials
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check if session-only methods can be called
    pub fn can_authenticate(&self) -> bool {
        self.credentials.has_session()
    }

    /// Build the parameters a call would send, without sending anything
    pub fn prepare(
        &self,
        descriptor: &MethodDescriptor,
        positional: &[&str],
        keyword: &[(&str, &str)],
    ) -> Result<ParameterSet, LastfmError> {
        let credentials = self.credentials.snapshot();
        RequestBuilder::new(descriptor, self.signer.as_ref()).build(
            positional,
            keyword,
            &credentials,
        )
    }

    /// Build, send and decode one call
    #[instrument(skip(self, descriptor, positional, keyword), fields(method = %descriptor))]
    pub async fn call(
        &self,
        descriptor: &MethodDescriptor,
        positional: &[&str],
        keyword: &[(&str, &str)],
    ) -> Result<Vec<Record>, LastfmError> {
        let params = self.prepare(descriptor, positional, keyword)?;
        debug!(keys = ?params.keys().collect::<Vec<_>>(), "sending request");

        let body = match self.transport.send(&self.base_url, &params).await {
            Ok(body) => body,
            Err(LastfmError::HttpStatus { status, body }) => {
                return Err(self.codec.service_error(&body).unwrap_or_else(|| {
                    LastfmError::HttpStatus { status, body }
                }));
            }
            Err(e) => return Err(e),
        };
        let records = self.codec.decode(&body, descriptor)?;

        debug!(records = records.len(), "decoded response");
        Ok(records)
    }

    /// Call a method by wire name, e.g. `"artist.search"`
    pub async fn invoke(
        &self,
        method: &str,
        positional: &[&str],
        keyword: &[(&str, &str)],
    ) -> Result<Vec<Record>, LastfmError> {
        let descriptor = lookup_method(method)
            .ok_or_else(|| LastfmError::InvalidParameters(format!("unknown method '{}'", method)))?;
        self.call(descriptor, positional, keyword).await
    }

    /// Callable handle for one method
    pub fn binding(&self, method: &str) -> Option<Binding<'_, T>> {
        lookup_method(method).map(|descriptor| Binding::new(self, descriptor))
    }

    /// One callable handle per registry entry, in registry order
    pub fn bindings(&self) -> Vec<Binding<'_, T>> {
        all_methods()
            .iter()
            .map(|descriptor| Binding::new(self, descriptor))
            .collect()
    }
}

/// Desktop authorization flow
///
/// Opening the URL and waiting for the user to approve it happens outside
/// this crate.
impl<T: Transport> LastfmClient<T> {
    /// Fetch an unauthorized request token
    pub async fn request_token(&self) -> Result<String, LastfmError> {
        let records = self.auth_get_token(&[]).await?;
        records
            .first()
            .and_then(Record::value)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or_else(|| LastfmError::MalformedResponse("auth.getToken returned no token".to_string()))
    }

    /// Page where the user approves `token` for this API key
    pub fn authorization_url(&self, token: &str) -> Result<String, LastfmError> {
        let credentials = self.credentials.snapshot();
        let url = Url::parse_with_params(
            AUTH_URL,
            &[("api_key", credentials.api_key()?), ("token", token)],
        )
        .map_err(|e| LastfmError::InvalidParameters(format!("Invalid authorization URL: {}", e)))?;
        Ok(url.into())
    }

    /// Trade an approved token for a session key and store it
    ///
    /// Returns the session key. The username reported by the service replaces
    /// the configured one.
    pub async fn complete_authorization(&self, token: &str) -> Result<String, LastfmError> {
        let records = self.auth_get_session(token, &[]).await?;
        let session = records.first().ok_or_else(|| {
            LastfmError::MalformedResponse("auth.getSession returned no session".to_string())
        })?;

        let key = session
            .get(1)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                LastfmError::MalformedResponse("auth.getSession returned no key".to_string())
            })?
            .to_string();

        if let Some(name) = session.get(0).filter(|name| !name.is_empty()) {
            self.credentials.set_username(name);
        }
        self.credentials.set_session_key(key.clone());

        info!("session established");
        Ok(key)
    }
}
