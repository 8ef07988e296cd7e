use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Language tag sent to TMDB (e.g. "en-US")
    #[serde(default = "default_language")]
    pub language: String,

    /// Per-request timeout for upstream metadata providers
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_language() -> String {
    "en-US".to_string()
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// A configured upstream service (library manager, metadata provider, ...).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub service_type: ServiceType,

    /// Base URL. May be empty for hosted metadata providers, which then use
    /// their public API endpoint.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Sonarr,
    Radarr,
    Prowlarr,
    Deluge,
    Jellyseerr,
    Trakt,
    Tvdb,
    Tmdb,
    Ai,
    Other,
}

impl ServiceType {
    /// Hosted metadata providers only need an API key; everything else is a
    /// self-hosted service that must have a URL.
    pub fn is_metadata_provider(&self) -> bool {
        matches!(self, Self::Tmdb | Self::Trakt | Self::Tvdb)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sonarr => "sonarr",
            Self::Radarr => "radarr",
            Self::Prowlarr => "prowlarr",
            Self::Deluge => "deluge",
            Self::Jellyseerr => "jellyseerr",
            Self::Trakt => "trakt",
            Self::Tvdb => "tvdb",
            Self::Tmdb => "tmdb",
            Self::Ai => "ai",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
