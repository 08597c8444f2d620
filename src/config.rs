//! Partner account configuration.
//!
//! Carries the values an application-side [`ClientFactory`] needs to build
//! the backing client: base URL and partner credentials. This crate only
//! transports these values; the login/token flow itself belongs to the
//! client implementation.
//!
//! [`ClientFactory`]: crate::client::ClientFactory

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::PartnerError;

/// Default Partner API base URL.
pub const DEFAULT_BASE_URL: &str = "https://partner.gupshup.io/partner";

const ENV_BASE_URL: &str = "GUPSHUP_PARTNER_BASE_URL";
const ENV_EMAIL: &str = "GUPSHUP_PARTNER_EMAIL";
const ENV_PASSWORD: &str = "GUPSHUP_PARTNER_PASSWORD";
const ENV_APP_ID: &str = "GUPSHUP_PARTNER_APP_ID";

/// Configuration for a partner account binding.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerConfig {
    /// Partner API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Partner account email.
    pub email: Option<String>,
    /// Partner account password.
    pub password: Option<SecretString>,
    /// Default app id for app-scoped operations.
    pub app_id: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            email: None,
            password: None,
            app_id: None,
        }
    }
}

impl PartnerConfig {
    /// Create a config with the default base URL and no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from `GUPSHUP_PARTNER_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(ENV_BASE_URL).unwrap_or_else(|_| default_base_url()),
            email: std::env::var(ENV_EMAIL).ok(),
            password: std::env::var(ENV_PASSWORD).ok().map(SecretString::from),
            app_id: std::env::var(ENV_APP_ID).ok(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), PartnerError> {
        if self.base_url.is_empty() {
            return Err(PartnerError::ConfigurationError(
                "Partner base URL must not be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PartnerError::ConfigurationError(format!(
                "Partner base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
