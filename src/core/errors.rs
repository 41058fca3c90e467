use thiserror::Error;

#[derive(Error, Debug)]
pub enum LastfmError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Service error{}: {}", .code.as_deref().map(|c| format!(" {c}")).unwrap_or_default(), .message.trim())]
    ServiceError {
        code: Option<String>,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{method} takes {expected} positional argument(s), {got} given")]
    ArityError {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl LastfmError {
    /// Failure below the service layer: the request may never have been
    /// processed, so re-issuing it can make sense.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::NetworkError(_) | Self::HttpStatus { .. }
        )
    }

    /// The service processed the request and rejected it.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::ServiceError { .. })
    }

    /// Service error message, if this is a service error.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::ServiceError { message, .. } => Some(message),
            _ => None,
        }
    }
}
