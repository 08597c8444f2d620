//! Test support helpers (crate-internal).
//!
//! Shared stub client used by the registry and accessor tests, plus
//! process-global env guards: Rust tests run concurrently by default, so any
//! test that mutates env vars should take the shared lock.

#![allow(unsafe_code)]

use std::any::Any;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::client::PartnerClient;
use crate::error::PartnerError;
use crate::traits::{
    AnalyticsManagement, AppManagement, FlowManagement, MessageManagement, TemplateManagement,
    WalletManagement,
};

struct StubApps;

#[async_trait::async_trait]
impl AppManagement for StubApps {
    async fn partner_apps(&self) -> Result<Value, PartnerError> {
        Ok(json!({ "partnerAppsList": [] }))
    }

    async fn app_token(&self, app_id: &str) -> Result<String, PartnerError> {
        Ok(format!("app-token-{app_id}"))
    }
}

struct StubTemplates;

#[async_trait::async_trait]
impl TemplateManagement for StubTemplates {
    async fn list_templates(&self, _app_id: &str) -> Result<Value, PartnerError> {
        Ok(json!({ "templates": [] }))
    }

    async fn submit_template(&self, _app_id: &str, template: Value) -> Result<Value, PartnerError> {
        Ok(template)
    }
}

struct StubMessages;

#[async_trait::async_trait]
impl MessageManagement for StubMessages {
    async fn send_message(&self, _app_id: &str, payload: Value) -> Result<Value, PartnerError> {
        Ok(payload)
    }
}

struct StubAnalytics;

#[async_trait::async_trait]
impl AnalyticsManagement for StubAnalytics {
    async fn usage(&self, _app_id: &str, _from: &str, _to: &str) -> Result<Value, PartnerError> {
        Ok(json!({ "partnerAppUsageList": [] }))
    }
}

struct StubWallet;

#[async_trait::async_trait]
impl WalletManagement for StubWallet {
    async fn balance(&self) -> Result<Value, PartnerError> {
        Ok(json!({ "currency": "USD", "balance": 0.0 }))
    }
}

struct StubFlows;

#[async_trait::async_trait]
impl FlowManagement for StubFlows {
    async fn list_flows(&self, _app_id: &str) -> Result<Value, PartnerError> {
        Ok(json!({ "flows": [] }))
    }
}

/// Stub backing client whose verbs echo what they were called with.
pub(crate) struct StubPartnerClient {
    id: &'static str,
    apps: Arc<dyn AppManagement>,
    templates: Arc<dyn TemplateManagement>,
    messages: Arc<dyn MessageManagement>,
    analytics: Arc<dyn AnalyticsManagement>,
    wallet: Arc<dyn WalletManagement>,
    flows: Arc<dyn FlowManagement>,
}

impl StubPartnerClient {
    pub(crate) fn new(id: &'static str) -> Self {
        Self {
            id,
            apps: Arc::new(StubApps),
            templates: Arc::new(StubTemplates),
            messages: Arc::new(StubMessages),
            analytics: Arc::new(StubAnalytics),
            wallet: Arc::new(StubWallet),
            flows: Arc::new(StubFlows),
        }
    }

    fn echo(&self, method: &str, endpoint: &str, body: Value) -> Value {
        json!({
            "client": self.id,
            "method": method,
            "endpoint": endpoint,
            "body": body,
        })
    }
}

#[async_trait::async_trait]
impl PartnerClient for StubPartnerClient {
    async fn partner_token(&self, force_refresh: bool) -> Result<String, PartnerError> {
        if force_refresh {
            Ok(format!("{}-token-fresh", self.id))
        } else {
            Ok(format!("{}-token", self.id))
        }
    }

    async fn get(&self, endpoint: &str, params: Value) -> Result<Value, PartnerError> {
        Ok(self.echo("get", endpoint, params))
    }

    async fn post(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError> {
        Ok(self.echo("post", endpoint, data))
    }

    async fn put(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError> {
        Ok(self.echo("put", endpoint, data))
    }

    async fn delete(&self, endpoint: &str, data: Value) -> Result<Value, PartnerError> {
        Ok(self.echo("delete", endpoint, data))
    }

    fn apps(&self) -> Arc<dyn AppManagement> {
        self.apps.clone()
    }

    fn templates(&self) -> Arc<dyn TemplateManagement> {
        self.templates.clone()
    }

    fn messages(&self) -> Arc<dyn MessageManagement> {
        self.messages.clone()
    }

    fn analytics(&self) -> Arc<dyn AnalyticsManagement> {
        self.analytics.clone()
    }

    fn wallet(&self) -> Arc<dyn WalletManagement> {
        self.wallet.clone()
    }

    fn flows(&self) -> Arc<dyn FlowManagement> {
        self.flows.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}
