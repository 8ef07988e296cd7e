use clap::{Parser, Subcommand, ValueEnum};
use marquee_common::MediaKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "Movie and show metadata resolver for TMDB and Trakt")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Movie,
    Show,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => MediaKind::Movie,
            KindArg::Show => MediaKind::Show,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Start {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Resolve metadata for a movie or show and print it as JSON
    Resolve {
        /// Media kind
        #[arg(long = "type", value_enum)]
        kind: KindArg,

        /// TMDB id
        #[arg(long)]
        tmdb: Option<u64>,

        /// Trakt id
        #[arg(long)]
        trakt: Option<u64>,

        /// TVDB id
        #[arg(long)]
        tvdb: Option<u64>,

        /// IMDb id (e.g. tt0133093)
        #[arg(long)]
        imdb: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
