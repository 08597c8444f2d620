//! gupshup-partner
//!
//! Service registry, memoizing facade, and typed client surface for the
//! Gupshup Partner API (WhatsApp Business platform management).
//!
//! The backing HTTP client is an external collaborator. Applications
//! register it (or a factory for it) in a [`ServiceRegistry`] under the
//! [`GUPSHUP_PARTNER`] key at bootstrap, then go through the
//! [`GupshupPartner`] facade, which resolves the binding once, memoizes it,
//! and forwards every call unchanged.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gupshup_partner::{GupshupPartner, ServiceRegistry, GUPSHUP_PARTNER};
//!
//! let registry = Arc::new(ServiceRegistry::new());
//! registry.bind(GUPSHUP_PARTNER, my_client);
//!
//! let partner = GupshupPartner::new(registry);
//! let apps = partner.get("/partner/account/api/partnerApps", serde_json::json!({})).await?;
//! ```
#![deny(unsafe_code)]

pub mod accessor;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use accessor::{GUPSHUP_PARTNER, GupshupPartner};
pub use client::{ClientFactory, PartnerClient};
pub use config::PartnerConfig;
pub use error::PartnerError;
pub use registry::{ServiceLookup, ServiceRegistry};
