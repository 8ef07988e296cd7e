//! The canonical media record returned by every resolution path.

use marquee_common::ExternalIds;
use serde::{Deserialize, Serialize};

use super::artwork::ImageBag;

/// Which normalizer produced a [`MediaRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    /// Built from a TMDB detail payload.
    Catalog,
    /// Built from a Trakt detail payload (plus its season list).
    Tracking,
}

/// Provider-independent description of a movie or show.
///
/// The field set is the same whichever provider resolved the request; only
/// `images` is specific to tracking-sourced records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub title: String,
    pub year: Option<i32>,
    pub overview: String,
    /// Minutes; 0 when unknown.
    pub runtime: u32,
    /// 0 to 10.
    pub rating: f64,
    pub genres: Vec<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub certification: Option<String>,
    /// Only movies belong to collections.
    pub collection: Option<CollectionRef>,
    /// Every identifier discovered while resolving, not just the inputs.
    pub ids: ExternalIds,
    pub original_language: Option<String>,
    /// Ascending by season number, specials excluded. Empty for movies.
    pub seasons: Vec<SeasonSummary>,
    /// Raw Trakt image bag, passed through untouched.
    pub images: Option<ImageBag>,
    pub keywords: Vec<String>,
    pub status: Option<String>,
    pub source: RecordSource,
}

/// The collection (franchise) a movie belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// One season of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season_number: u32,
    /// Provider-internal season id (TMDB or Trakt, matching the record source).
    pub id: Option<u64>,
    pub name: String,
    pub episode_count: Option<u32>,
    pub air_date: Option<String>,
    pub poster_path: Option<String>,
}

/// Drop specials (season 0 and anything malformed below it) and sort the rest.
pub(crate) fn ordered_seasons<I>(seasons: I) -> Vec<SeasonSummary>
where
    I: IntoIterator<Item = (i64, SeasonSummary)>,
{
    let mut seasons: Vec<SeasonSummary> = seasons
        .into_iter()
        .filter_map(|(number, mut season)| {
            let number = u32::try_from(number).ok().filter(|n| *n > 0)?;
            season.season_number = number;
            Some(season)
        })
        .collect();
    seasons.sort_by_key(|s| s.season_number);
    seasons
}
