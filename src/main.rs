mod cli;

use marquee::{config, metadata::Resolver, server};
use marquee_common::{ExternalIds, MediaKind};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI flags override the config file
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting Marquee server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    server::start_server(config).await
}

async fn resolve(ids: ExternalIds, kind: MediaKind, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let resolver = Resolver::from_config(&config);

    match resolver.resolve(&ids, kind).await {
        Ok(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Err(e) => {
            tracing::debug!("{}", e);
            anyhow::bail!("metadata unavailable")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "marquee=trace,marquee_common=debug,tower_http=debug".to_string()
        } else {
            "marquee=info,tower_http=info".to_string()
        }
    });

    // Logs go to stderr so `resolve` output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Resolve {
            kind,
            tmdb,
            trakt,
            tvdb,
            imdb,
        } => {
            let ids = ExternalIds {
                tmdb,
                trakt,
                tvdb,
                imdb: imdb.filter(|id| !id.trim().is_empty()),
            };
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(resolve(ids, kind.into(), cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("marquee {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Metadata language: {}", config.metadata.language);
            println!("  Services: {}", config.services.len());
            for service in &config.services {
                println!(
                    "    {} ({}){}",
                    service.name,
                    service.service_type,
                    if service.enabled { "" } else { " [disabled]" }
                );
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
    }

    Ok(())
}
