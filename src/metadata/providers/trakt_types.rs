//! Trakt API v2 response types (requested with `extended=full,images`).
//!
//! Only the normalizers read these structures.

use marquee_common::{ExternalIds, MediaKind};
use serde::Deserialize;

use crate::metadata::artwork::ImageBag;

/// A movie or show as returned by `/movies/{id}` or `/shows/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraktItem {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub overview: Option<String>,
    pub runtime: Option<u32>,
    pub rating: Option<f64>,
    pub genres: Option<Vec<String>>,
    pub certification: Option<String>,
    #[serde(default)]
    pub ids: ExternalIds,
    pub language: Option<String>,
    pub status: Option<String>,
    pub images: Option<ImageBag>,
}

/// Entry of `/shows/{id}/seasons`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraktSeason {
    pub number: Option<i64>,
    #[serde(default)]
    pub ids: TraktSeasonIds,
    pub title: Option<String>,
    pub episode_count: Option<u32>,
    pub first_aired: Option<String>,
    pub images: Option<ImageBag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraktSeasonIds {
    pub trakt: Option<u64>,
    pub tvdb: Option<u64>,
    pub tmdb: Option<u64>,
}

/// Entry of `/search/...`. Exactly one of `movie` / `show` is usually set,
/// matching `type`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraktSearchResult {
    #[serde(rename = "type")]
    pub result_type: Option<String>,
    pub score: Option<f64>,
    pub movie: Option<TraktItem>,
    pub show: Option<TraktItem>,
}

impl TraktSearchResult {
    /// The embedded item for `kind`, if this hit carries one.
    pub fn item(&self, kind: MediaKind) -> Option<&TraktItem> {
        match kind {
            MediaKind::Movie => self.movie.as_ref(),
            MediaKind::Show => self.show.as_ref(),
        }
    }
}
