//! Capability handle traits for the Partner API sub-resources.
//!
//! Each accessor on [`PartnerClient`](crate::client::PartnerClient) returns
//! one of these handles. Operation names follow the Partner API surface;
//! implementations live with the backing client and are out of scope here.

use serde_json::Value;

use crate::error::PartnerError;

/// Partner apps and their access.
#[async_trait::async_trait]
pub trait AppManagement: Send + Sync {
    /// List all apps linked to the partner account.
    async fn partner_apps(&self) -> Result<Value, PartnerError>;

    /// Fetch an app-level access token.
    async fn app_token(&self, app_id: &str) -> Result<String, PartnerError>;
}

/// Message template lifecycle.
#[async_trait::async_trait]
pub trait TemplateManagement: Send + Sync {
    /// List message templates for an app.
    async fn list_templates(&self, app_id: &str) -> Result<Value, PartnerError>;

    /// Submit a template for approval.
    async fn submit_template(&self, app_id: &str, template: Value) -> Result<Value, PartnerError>;
}

/// Outbound messaging.
#[async_trait::async_trait]
pub trait MessageManagement: Send + Sync {
    /// Send a message from an app.
    async fn send_message(&self, app_id: &str, payload: Value) -> Result<Value, PartnerError>;
}

/// Usage and quality analytics.
#[async_trait::async_trait]
pub trait AnalyticsManagement: Send + Sync {
    /// Usage records for an app over a date range (YYYY-MM-DD bounds).
    async fn usage(&self, app_id: &str, from: &str, to: &str) -> Result<Value, PartnerError>;
}

/// Partner wallet.
#[async_trait::async_trait]
pub trait WalletManagement: Send + Sync {
    /// Current wallet balance for the partner account.
    async fn balance(&self) -> Result<Value, PartnerError>;
}

/// WhatsApp Flows.
#[async_trait::async_trait]
pub trait FlowManagement: Send + Sync {
    /// List Flows for an app.
    async fn list_flows(&self, app_id: &str) -> Result<Value, PartnerError>;
}
