//! Read-only lookup of configured upstream services.
//!
//! The resolver only ever asks "is there a usable TMDB / Trakt service, and
//! how do I reach it?". The answer comes from the `[[services]]` section of
//! the config; nothing here creates, edits or deletes entries.

use crate::config::{Config, ServiceConfig, ServiceType};

/// Connection details for one configured service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// 1-based position of the entry in the config file.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Base URL with any trailing slash removed. Empty when the provider's
    /// public endpoint should be used.
    pub base_url: String,
    /// API key / client id.
    pub api_key: String,
}

/// Looks up the service to use for a given provider type.
pub trait ServiceRegistry: Send + Sync {
    /// Return the configured service of `service_type`, or `None` when there
    /// is no usable one.
    fn find_configured(&self, service_type: ServiceType) -> Option<ServiceRecord>;
}

/// [`ServiceRegistry`] backed by the loaded configuration.
///
/// The first *enabled* entry of a type wins.
#[derive(Debug, Clone, Default)]
pub struct ConfigServiceRegistry {
    entries: Vec<(ServiceType, bool, ServiceRecord)>,
}

impl ConfigServiceRegistry {
    /// Build a registry from service config entries.
    pub fn new(services: &[ServiceConfig]) -> Self {
        let entries = services
            .iter()
            .enumerate()
            .map(|(idx, service)| {
                let record = ServiceRecord {
                    id: idx as u32 + 1,
                    name: service.name.clone(),
                    base_url: service.url.trim_end_matches('/').to_string(),
                    api_key: service.api_key.clone(),
                };
                (service.service_type, service.enabled, record)
            })
            .collect();

        Self { entries }
    }

    /// Build a registry from a full [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.services)
    }
}

impl ServiceRegistry for ConfigServiceRegistry {
    fn find_configured(&self, service_type: ServiceType) -> Option<ServiceRecord> {
        self.entries
            .iter()
            .find(|(ty, enabled, _)| *ty == service_type && *enabled)
            .map(|(_, _, record)| record.clone())
    }
}
