//! Partner facade.
//!
//! Resolves the backing client from a registry on first use, memoizes the
//! resolution for the lifetime of the facade (or until [`reset`]), and
//! forwards every call unchanged. The facade holds no state of its own
//! beyond the memoized resolution; everything else lives in the resolved
//! client and the registry.
//!
//! [`reset`]: GupshupPartner::reset

use std::borrow::Cow;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::client::PartnerClient;
use crate::error::PartnerError;
use crate::registry::ServiceLookup;
use crate::traits::{
    AnalyticsManagement, AppManagement, FlowManagement, MessageManagement, TemplateManagement,
    WalletManagement,
};

/// Registry key the facade resolves by default.
pub const GUPSHUP_PARTNER: &str = "gupshup.partner";

/// Facade over the registered partner client.
///
/// Every method resolves the backing client (one registry lookup across
/// consecutive calls) and invokes the matching [`PartnerClient`] operation,
/// returning its result or propagating its failure unchanged.
pub struct GupshupPartner {
    registry: Arc<dyn ServiceLookup>,
    key: Cow<'static, str>,
    resolved: RwLock<Option<Arc<dyn PartnerClient>>>,
}

impl GupshupPartner {
    /// Facade over the standard [`GUPSHUP_PARTNER`] binding.
    pub fn new(registry: Arc<dyn ServiceLookup>) -> Self {
        Self::with_key(registry, GUPSHUP_PARTNER)
    }

    /// Facade over an arbitrary binding key (e.g. a sandbox account).
    pub fn with_key(registry: Arc<dyn ServiceLookup>, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            registry,
            key: key.into(),
            resolved: RwLock::new(None),
        }
    }

    /// The key this facade resolves.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve the backing client, caching the result until [`reset`].
    ///
    /// Fails with [`PartnerError::UnresolvedService`] when the registry has
    /// no binding for the key.
    ///
    /// [`reset`]: Self::reset
    pub fn resolve(&self) -> Result<Arc<dyn PartnerClient>, PartnerError> {
        if let Ok(guard) = self.resolved.read()
            && let Some(client) = guard.as_ref()
        {
            return Ok(client.clone());
        }

        let mut guard = self
            .resolved
            .write()
            .map_err(|_| PartnerError::InternalError("Resolution cache lock poisoned".to_string()))?;
        // Another caller may have resolved while we waited for the lock.
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        tracing::debug!(key = %self.key, "resolving partner client");
        let client = self
            .registry
            .lookup(&self.key)
            .ok_or_else(|| PartnerError::UnresolvedService(self.key.to_string()))?;
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Drop the memoized resolution; the next call looks the key up again.
    ///
    /// Primarily lets tests swap in a double between cases.
    pub fn reset(&self) {
        tracing::debug!(key = %self.key, "resetting partner client resolution");
        if let Ok(mut guard) = self.resolved.write() {
            *guard = None;
        }
    }

    // Forwarding surface. One delegating method per client operation; no
    // catch, wrap, retry, or translation on either path.

    /// Fetch the partner-level access token.
    pub async fn partner_token(&self, force_refresh: bool) -> Result<String, PartnerError> {
        self.resolve()?.partner_token(force_refresh).await
    }

    /// Perform a GET against a partner endpoint.
    pub async fn get(&self, endpoint: &str, params: Value) -> Result<Value, PartnerError> {
        self.resolve()?.get(endpoint, params).await
    }

    /// Perform a POST against a partner endpoint.
    pub async fn post(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError> {
        self.resolve()?.post(endpoint, data).await
    }

    /// Perform a PUT against a partner endpoint.
    pub async fn put(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError> {
        self.resolve()?.put(endpoint, data).await
    }

    /// Perform a DELETE against a partner endpoint.
    pub async fn delete(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError> {
        self.resolve()?.delete(endpoint, data).await
    }

    /// App management handle of the resolved client.
    pub fn apps(&self) -> Result<Arc<dyn AppManagement>, PartnerError> {
        Ok(self.resolve()?.apps())
    }

    /// Template management handle of the resolved client.
    pub fn templates(&self) -> Result<Arc<dyn TemplateManagement>, PartnerError> {
        Ok(self.resolve()?.templates())
    }

    /// Message management handle of the resolved client.
    pub fn messages(&self) -> Result<Arc<dyn MessageManagement>, PartnerError> {
        Ok(self.resolve()?.messages())
    }

    /// Analytics handle of the resolved client.
    pub fn analytics(&self) -> Result<Arc<dyn AnalyticsManagement>, PartnerError> {
        Ok(self.resolve()?.analytics())
    }

    /// Wallet handle of the resolved client.
    pub fn wallet(&self) -> Result<Arc<dyn WalletManagement>, PartnerError> {
        Ok(self.resolve()?.wallet())
    }

    /// Flows handle of the resolved client.
    pub fn flows(&self) -> Result<Arc<dyn FlowManagement>, PartnerError> {
        Ok(self.resolve()?.flows())
    }
}

impl std::fmt::Debug for GupshupPartner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let resolved = self
            .resolved
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false);
        f.debug_struct("GupshupPartner")
            .field("key", &self.key)
            .field("resolved", &resolved)
            .finish()
    }
}
