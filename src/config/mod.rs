mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./marquee.toml",
        "~/.config/marquee/config.toml",
        "/etc/marquee/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.metadata.request_timeout_secs == 0 {
        anyhow::bail!("Metadata request timeout cannot be 0");
    }

    let mut seen = HashSet::new();
    for service in config.services.iter().filter(|s| s.enabled) {
        if service.service_type.is_metadata_provider() {
            if service.api_key.is_empty() {
                anyhow::bail!(
                    "Service '{}' ({}) is enabled but has no API key",
                    service.name,
                    service.service_type
                );
            }
        } else if service.url.is_empty() {
            anyhow::bail!("Service '{}' is enabled but has no URL", service.name);
        }

        // Only the first enabled service of a type is ever used.
        if !seen.insert(service.service_type) {
            tracing::warn!(
                "Multiple enabled {} services; '{}' will be ignored",
                service.service_type,
                service.name
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_when_empty() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.metadata.language, "en-US");
        assert_eq!(config.metadata.request_timeout_secs, 30);
        assert!(config.services.is_empty());
    }

    #[test]
    fn parses_services() {
        let file = write_config(
            r#"
[server]
port = 8080

[metadata]
language = "de-DE"

[[services]]
name = "TMDB"
type = "tmdb"
api_key = "tmdb-key"

[[services]]
name = "Trakt"
type = "trakt"
url = "https://api.trakt.tv"
api_key = "trakt-key"
enabled = false

[[services]]
name = "Sonarr"
type = "sonarr"
url = "http://localhost:8989"
api_key = "sonarr-key"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.metadata.language, "de-DE");
        assert_eq!(config.services.len(), 3);
        assert_eq!(config.services[0].service_type, ServiceType::Tmdb);
        assert!(config.services[0].enabled);
        assert!(config.services[0].url.is_empty());
        assert!(!config.services[1].enabled);
        assert_eq!(config.services[2].service_type, ServiceType::Sonarr);
    }

    #[test]
    fn rejects_zero_port() {
        let file = write_config("[server]\nport = 0\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn rejects_metadata_provider_without_key() {
        let file = write_config(
            r#"
[[services]]
name = "TMDB"
type = "tmdb"
"#,
        );
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("no API key"));
    }

    #[test]
    fn disabled_provider_without_key_is_fine() {
        let file = write_config(
            r#"
[[services]]
name = "TMDB"
type = "tmdb"
enabled = false
"#,
        );
        assert!(load_config(file.path()).is_ok());
    }

    #[test]
    fn rejects_self_hosted_service_without_url() {
        let file = write_config(
            r#"
[[services]]
name = "Radarr"
type = "radarr"
api_key = "k"
"#,
        );
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("no URL"));
    }

    #[test]
    fn rejects_unknown_service_type() {
        let file = write_config(
            r#"
[[services]]
name = "Plex"
type = "plex"
url = "http://localhost:32400"
"#,
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn custom_path_takes_precedence() {
        let file = write_config("[server]\nport = 9999\n");
        let config = load_config_or_default(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9999);
    }
}
