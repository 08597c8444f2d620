//! Error Handling Module
//!
//! The only failure native to this crate is an unresolved registry binding.
//! The remaining variants exist so backing client implementations and their
//! callers share one taxonomy; the facade passes them through verbatim and
//! never wraps, retries, or translates.

use thiserror::Error;

/// Errors surfaced by the partner facade and backing clients.
#[derive(Error, Debug)]
pub enum PartnerError {
    /// No binding registered for the accessor key.
    ///
    /// A bootstrap/configuration defect: surfaced immediately, never
    /// retried.
    #[error("No service bound for key '{0}'")]
    UnresolvedService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Authentication failed in the backing client
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// HTTP transport error raised by the backing client
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-success response from the Partner API
    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl PartnerError {
    /// Convenience constructor for API errors.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// Whether this is the unresolved-binding failure.
    pub const fn is_unresolved(&self) -> bool {
        matches!(self, Self::UnresolvedService(_))
    }

    /// HTTP status code, when the error carries one.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}
