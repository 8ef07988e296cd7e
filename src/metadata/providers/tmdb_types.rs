//! TMDB v3 response types.
//!
//! Nearly every field is optional: TMDB omits or nulls fields freely and the
//! movie and TV payloads share one detail type. Only the normalizers read
//! these structures.

use serde::Deserialize;

use crate::metadata::record::CollectionRef;

/// `/movie/{id}` or `/tv/{id}` with `append_to_response`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbDetail {
    pub id: Option<u64>,
    /// Movies.
    pub title: Option<String>,
    /// Shows.
    pub name: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub runtime: Option<u32>,
    pub episode_run_time: Option<Vec<u32>>,
    pub vote_average: Option<f64>,
    pub genres: Option<Vec<TmdbGenre>>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub keywords: Option<TmdbKeywords>,
    pub belongs_to_collection: Option<CollectionRef>,
    pub imdb_id: Option<String>,
    pub external_ids: Option<TmdbExternalIds>,
    pub original_language: Option<String>,
    pub seasons: Option<Vec<TmdbSeason>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub name: String,
}

/// Movies nest keywords under `keywords`, shows under `results`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbKeywords {
    pub keywords: Option<Vec<TmdbKeyword>>,
    pub results: Option<Vec<TmdbKeyword>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbKeyword {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbExternalIds {
    pub imdb_id: Option<String>,
    pub tvdb_id: Option<u64>,
}

/// Season entry embedded in show detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSeason {
    pub id: Option<u64>,
    pub season_number: Option<i64>,
    pub name: Option<String>,
    pub episode_count: Option<u32>,
    pub air_date: Option<String>,
    pub poster_path: Option<String>,
}

/// `/tv/{id}/season/{n}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSeasonDetail {
    pub id: Option<u64>,
    pub season_number: Option<i64>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub episodes: Vec<TmdbEpisode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbEpisode {
    pub id: Option<u64>,
    pub episode_number: Option<u32>,
    pub season_number: Option<i64>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub runtime: Option<u32>,
    pub still_path: Option<String>,
    pub vote_average: Option<f64>,
}

/// `/collection/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCollection {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub parts: Vec<TmdbListItem>,
}

/// `/{movie|tv}/{id}/credits`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    pub id: Option<u64>,
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCastMember {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCrewMember {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub job: Option<String>,
    pub department: Option<String>,
    pub profile_path: Option<String>,
}

/// A paged list response (`/recommendations`, `/similar`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Summary entry in list responses; movies fill `title`, shows fill `name`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbListItem {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
}
