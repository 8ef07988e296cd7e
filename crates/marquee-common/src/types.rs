//! Core type definitions shared by the resolver, the HTTP surface and the CLI.
//!
//! All enums serialize in lowercase so they line up with the query parameters
//! and path segments the upstream providers use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of media being resolved.
///
/// Fixed for the duration of one resolution; it picks both the upstream
/// endpoints and the normalization path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A single feature film.
    Movie,
    /// A TV series.
    Show,
}

impl MediaKind {
    /// Lowercase name used in URLs and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(Self::Movie),
            "show" | "shows" | "tv" | "series" => Ok(Self::Show),
            other => Err(Error::invalid_input(format!("unknown media kind: {other}"))),
        }
    }
}

/// Identifier namespaces accepted by the tracking provider's id lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalIdType {
    /// TMDB numeric id.
    Tmdb,
    /// Trakt numeric id.
    Trakt,
    /// TVDB numeric id.
    Tvdb,
    /// IMDb `tt` id.
    Imdb,
}

impl ExternalIdType {
    /// Lowercase name used as the lookup path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tmdb => "tmdb",
            Self::Trakt => "trakt",
            Self::Tvdb => "tvdb",
            Self::Imdb => "imdb",
        }
    }
}

impl fmt::Display for ExternalIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExternalIdType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tmdb" => Ok(Self::Tmdb),
            "trakt" => Ok(Self::Trakt),
            "tvdb" => Ok(Self::Tvdb),
            "imdb" => Ok(Self::Imdb),
            other => Err(Error::invalid_input(format!("unknown id type: {other}"))),
        }
    }
}
