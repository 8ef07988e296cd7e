//! TMDB detail → [`MediaRecord`].

use marquee_common::ExternalIds;

use super::{clamp_rating, year_from_date};
use crate::metadata::providers::tmdb_types::{TmdbDetail, TmdbKeyword};
use crate::metadata::record::{ordered_seasons, MediaRecord, RecordSource, SeasonSummary};

/// Build a canonical record from a TMDB movie or show detail payload.
pub fn normalize_catalog(raw: &TmdbDetail) -> MediaRecord {
    let title = raw
        .title
        .clone()
        .or_else(|| raw.name.clone())
        .unwrap_or_default();

    // TMDB sends "" for unknown dates.
    let date = [raw.release_date.as_deref(), raw.first_air_date.as_deref()]
        .into_iter()
        .flatten()
        .find(|d| !d.trim().is_empty());

    let runtime = raw
        .runtime
        .filter(|r| *r > 0)
        .or_else(|| {
            raw.episode_run_time
                .as_ref()
                .and_then(|times| times.first().copied())
        })
        .unwrap_or(0);

    let keywords: Vec<String> = raw
        .keywords
        .as_ref()
        .and_then(|k| k.keywords.as_ref().or(k.results.as_ref()))
        .map(|list| list.iter().map(|k: &TmdbKeyword| k.name.clone()).collect())
        .unwrap_or_default();

    let seasons = ordered_seasons(raw.seasons.iter().flatten().map(|s| {
        let number = s.season_number.unwrap_or(0);
        let summary = SeasonSummary {
            season_number: 0,
            id: s.id,
            name: s.name.clone().unwrap_or_else(|| format!("Season {number}")),
            episode_count: s.episode_count,
            air_date: s.air_date.clone(),
            poster_path: s.poster_path.clone(),
        };
        (number, summary)
    }));

    let external = raw.external_ids.as_ref();
    let ids = ExternalIds {
        tmdb: raw.id,
        trakt: None,
        tvdb: external.and_then(|e| e.tvdb_id),
        imdb: raw
            .imdb_id
            .clone()
            .or_else(|| external.and_then(|e| e.imdb_id.clone()))
            .filter(|id| !id.is_empty()),
    };

    MediaRecord {
        title,
        year: year_from_date(date),
        overview: raw.overview.clone().unwrap_or_default(),
        runtime,
        rating: clamp_rating(raw.vote_average),
        genres: raw
            .genres
            .iter()
            .flatten()
            .map(|g| g.name.clone())
            .collect(),
        poster_path: raw.poster_path.clone(),
        backdrop_path: raw.backdrop_path.clone(),
        certification: None,
        collection: raw.belongs_to_collection.clone(),
        ids,
        original_language: raw.original_language.clone(),
        seasons,
        images: None,
        keywords,
        status: raw.status.clone(),
        source: RecordSource::Catalog,
    }
}
