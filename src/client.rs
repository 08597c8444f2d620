//! Client Module
//!
//! Defines the backing Gupshup Partner client surface with dynamic dispatch
//! support. Implementations perform the actual HTTP work (request
//! construction, token refresh, response parsing) and live outside this
//! crate; everything here is the forwarding contract the facade delegates
//! to, one method at a time, with results and errors crossing it unchanged.

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use crate::error::PartnerError;
use crate::traits::{
    AnalyticsManagement, AppManagement, FlowManagement, MessageManagement, TemplateManagement,
    WalletManagement,
};

/// Unified Gupshup Partner client interface.
#[async_trait::async_trait]
pub trait PartnerClient: Send + Sync {
    /// Fetch the partner-level access token.
    ///
    /// `force_refresh` bypasses any token cached by the implementation.
    async fn partner_token(&self, force_refresh: bool) -> Result<String, PartnerError>;

    /// Perform a GET against a partner endpoint.
    async fn get(&self, endpoint: &str, params: Value) -> Result<Value, PartnerError>;

    /// Perform a POST against a partner endpoint.
    async fn post(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError>;

    /// Perform a PUT against a partner endpoint.
    async fn put(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError>;

    /// Perform a DELETE against a partner endpoint.
    async fn delete(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError>;

    /// App management handle.
    fn apps(&self) -> Arc<dyn AppManagement>;

    /// Template management handle.
    fn templates(&self) -> Arc<dyn TemplateManagement>;

    /// Message management handle.
    fn messages(&self) -> Arc<dyn MessageManagement>;

    /// Analytics handle.
    fn analytics(&self) -> Arc<dyn AnalyticsManagement>;

    /// Wallet handle.
    fn wallet(&self) -> Arc<dyn WalletManagement>;

    /// WhatsApp Flows handle.
    fn flows(&self) -> Arc<dyn FlowManagement>;

    /// Get as Any for dynamic casting to a concrete client type.
    fn as_any(&self) -> &dyn Any;
}

/// Constructs a [`PartnerClient`] on first resolution.
///
/// Kept synchronous: registry resolution is a cheap memoized lookup, not a
/// blocking operation. Construction failures are a bootstrap concern and
/// stay with the application.
pub trait ClientFactory: Send + Sync {
    /// Build the client this factory was registered for.
    fn create(&self) -> Arc<dyn PartnerClient>;
}
