//! Service registry.
//!
//! Maps string keys to partner client bindings. The registry is scoped
//! explicitly: the application constructs one, populates it at bootstrap,
//! and shares it via `Arc`; there is no process-global instance. A binding
//! is either an already-constructed client or a factory whose client is
//! built on first lookup, at most once even under concurrent access.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::client::{ClientFactory, PartnerClient};

/// Read side of a registry: the seam the facade depends on.
pub trait ServiceLookup: Send + Sync {
    /// Look up the binding for `key`, constructing it first if the binding
    /// is a factory that has not run yet.
    fn lookup(&self, key: &str) -> Option<Arc<dyn PartnerClient>>;
}

struct Binding {
    factory: Option<Arc<dyn ClientFactory>>,
    instance: OnceLock<Arc<dyn PartnerClient>>,
}

impl Binding {
    fn from_instance(client: Arc<dyn PartnerClient>) -> Self {
        let instance = OnceLock::new();
        let _ = instance.set(client);
        Self {
            factory: None,
            instance,
        }
    }

    fn from_factory(factory: Arc<dyn ClientFactory>) -> Self {
        Self {
            factory: Some(factory),
            instance: OnceLock::new(),
        }
    }

    /// The `OnceLock` gives the set-if-absent guarantee: concurrent first
    /// lookups construct the client exactly once.
    fn resolve(&self) -> Option<Arc<dyn PartnerClient>> {
        if let Some(client) = self.instance.get() {
            return Some(client.clone());
        }
        let factory = self.factory.as_ref()?;
        Some(self.instance.get_or_init(|| factory.create()).clone())
    }
}

/// Keyed partner client bindings.
#[derive(Default)]
pub struct ServiceRegistry {
    bindings: RwLock<HashMap<String, Arc<Binding>>>,
}

impl ServiceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an already-constructed client instance, replacing any previous
    /// binding for the key.
    pub fn bind(&self, key: impl Into<String>, client: Arc<dyn PartnerClient>) {
        let key = key.into();
        tracing::debug!(key = %key, "binding partner client instance");
        if let Ok(mut bindings) = self.bindings.write() {
            bindings.insert(key, Arc::new(Binding::from_instance(client)));
        }
    }

    /// Bind a factory; the client is constructed on first lookup, at most
    /// once.
    pub fn bind_factory(&self, key: impl Into<String>, factory: Arc<dyn ClientFactory>) {
        let key = key.into();
        tracing::debug!(key = %key, "binding partner client factory");
        if let Ok(mut bindings) = self.bindings.write() {
            bindings.insert(key, Arc::new(Binding::from_factory(factory)));
        }
    }

    /// Remove the binding for `key`. Returns whether a binding existed.
    pub fn unbind(&self, key: &str) -> bool {
        match self.bindings.write() {
            Ok(mut bindings) => bindings.remove(key).is_some(),
            Err(_) => false,
        }
    }

    /// Whether a binding exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        match self.bindings.read() {
            Ok(bindings) => bindings.contains_key(key),
            Err(_) => false,
        }
    }

    /// All currently bound keys.
    pub fn keys(&self) -> Vec<String> {
        match self.bindings.read() {
            Ok(bindings) => bindings.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Remove every binding (used between test runs).
    pub fn clear(&self) {
        if let Ok(mut bindings) = self.bindings.write() {
            bindings.clear();
        }
    }
}

impl ServiceLookup for ServiceRegistry {
    fn lookup(&self, key: &str) -> Option<Arc<dyn PartnerClient>> {
        let binding = match self.bindings.read() {
            Ok(bindings) => bindings.get(key)?.clone(),
            Err(_) => return None,
        };
        // Construction happens outside the map lock.
        binding.resolve()
    }
}
